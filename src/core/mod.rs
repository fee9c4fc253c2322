pub mod break_points;
pub mod date_source;
pub mod mapping;
pub mod mapping_point;
pub mod primitives;
pub mod search;
pub mod types;

pub use break_points::{BreakPoint, BreakPointSet, rebuild_end_points, rebuild_mid_points};
pub use date_source::{DATA_SOURCE_MAX_RECORD_COUNT, DateSeries, DateSource, ensure_record_count};
pub use mapping::{
    InverseMappingPolicy, PointKind, classify, date_to_offset, distorted_date_from,
    distorted_offset_from, linear_date_from, linear_offset_from, linear_time_from,
    offset_to_date,
};
pub use mapping_point::TimeMappingPoint;
pub use primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
pub use search::find_nearest_date;
pub use types::{ExpansionConfig, Insets, SliderAxis, SliderGeometry};
