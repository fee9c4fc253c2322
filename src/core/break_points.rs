use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::date_source::{DateSource, ensure_record_count};
use crate::core::mapping_point::TimeMappingPoint;
use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::types::{ExpansionConfig, SliderGeometry};
use crate::error::{SliderError, SliderResult};

/// Named anchors of the piecewise-linear transfer function, in axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BreakPoint {
    Earliest,
    FirstDistorted,
    Selected,
    LastDistorted,
    Latest,
}

impl BreakPoint {
    pub const ALL: [BreakPoint; 5] = [
        BreakPoint::Earliest,
        BreakPoint::FirstDistorted,
        BreakPoint::Selected,
        BreakPoint::LastDistorted,
        BreakPoint::Latest,
    ];
}

/// Break points currently defining the transfer function.
///
/// Earliest/Latest are present together or not at all. Mid points only exist
/// while a selection is set, and the distorted pair only while distortion
/// mode is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakPointSet {
    earliest: Option<TimeMappingPoint>,
    first_distorted: Option<TimeMappingPoint>,
    selected: Option<TimeMappingPoint>,
    last_distorted: Option<TimeMappingPoint>,
    latest: Option<TimeMappingPoint>,
}

impl BreakPointSet {
    #[must_use]
    pub fn get(&self, kind: BreakPoint) -> Option<TimeMappingPoint> {
        match kind {
            BreakPoint::Earliest => self.earliest,
            BreakPoint::FirstDistorted => self.first_distorted,
            BreakPoint::Selected => self.selected,
            BreakPoint::LastDistorted => self.last_distorted,
            BreakPoint::Latest => self.latest,
        }
    }

    #[must_use]
    pub fn earliest(&self) -> Option<TimeMappingPoint> {
        self.earliest
    }

    #[must_use]
    pub fn first_distorted(&self) -> Option<TimeMappingPoint> {
        self.first_distorted
    }

    #[must_use]
    pub fn selected(&self) -> Option<TimeMappingPoint> {
        self.selected
    }

    #[must_use]
    pub fn last_distorted(&self) -> Option<TimeMappingPoint> {
        self.last_distorted
    }

    #[must_use]
    pub fn latest(&self) -> Option<TimeMappingPoint> {
        self.latest
    }

    /// Earliest and Latest, when the mapping is usable.
    #[must_use]
    pub fn ends(&self) -> Option<(TimeMappingPoint, TimeMappingPoint)> {
        Some((self.earliest?, self.latest?))
    }

    /// FirstDistorted and LastDistorted, when the magnified window exists.
    #[must_use]
    pub fn distorted_window(&self) -> Option<(TimeMappingPoint, TimeMappingPoint)> {
        Some((self.first_distorted?, self.last_distorted?))
    }

    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.ends().is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().is_empty()
    }

    /// Slope of the undistorted mapping from Earliest to Latest.
    #[must_use]
    pub fn linear_slope(&self) -> Option<f64> {
        self.ends()
            .map(|(earliest, latest)| earliest.slope_to(latest))
    }

    /// Present break points in axis order.
    #[must_use]
    pub fn iter(&self) -> SmallVec<[(BreakPoint, TimeMappingPoint); 5]> {
        BreakPoint::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|point| (kind, point)))
            .collect()
    }

    #[must_use]
    pub fn without_mid_points(self) -> Self {
        Self {
            first_distorted: None,
            selected: None,
            last_distorted: None,
            ..self
        }
    }
}

/// Builds Earliest/Latest from the date source and the control geometry.
///
/// Sources with two dates or fewer yield an empty set, which leaves the
/// control unusable for interaction.
pub fn rebuild_end_points<S: DateSource + ?Sized>(
    source: &S,
    geometry: SliderGeometry,
    max_record_count: usize,
) -> SliderResult<BreakPointSet> {
    ensure_record_count(source, max_record_count)?;

    let count = source.count();
    if count <= 2 {
        return Ok(BreakPointSet::default());
    }

    let last_index = count - 1;
    let earliest = TimeMappingPoint::new(
        datetime_to_unix_seconds(source.date_at(0)),
        geometry.lowest_offset(),
        Some(0),
    );
    let latest = TimeMappingPoint::new(
        datetime_to_unix_seconds(source.date_at(last_index)),
        geometry.highest_offset(),
        Some(last_index),
    );

    Ok(BreakPointSet {
        earliest: Some(earliest),
        latest: Some(latest),
        ..BreakPointSet::default()
    })
}

/// Rebuilds Selected and the distorted window around `selected_index`.
///
/// Mid points are always cleared first. Without end points or a selection
/// nothing else is built. FirstDistorted/LastDistorted are only built when
/// the source is large enough for distortion, and their offsets are clamped
/// to the Earliest/Latest offsets.
pub fn rebuild_mid_points<S: DateSource + ?Sized>(
    break_points: BreakPointSet,
    selected_index: Option<usize>,
    source: &S,
    expansion: ExpansionConfig,
) -> SliderResult<BreakPointSet> {
    let mut rebuilt = break_points.without_mid_points();
    let Some((earliest, latest)) = rebuilt.ends() else {
        return Ok(rebuilt);
    };
    let Some(selected_index) = selected_index else {
        return Ok(rebuilt);
    };

    let count = source.count();
    if selected_index >= count {
        return Err(SliderError::IndexOutOfRange {
            index: selected_index,
            count,
        });
    }

    let linear_slope = earliest.slope_to(latest);
    let selected_time = datetime_to_unix_seconds(source.date_at(selected_index));
    let selected = earliest
        .project_time(selected_time, linear_slope)
        .with_index(selected_index);
    rebuilt.selected = Some(selected);

    if !expansion.is_active(count) {
        return Ok(rebuilt);
    }

    let last_index = count - 1;
    let first_index = selected_index.saturating_sub(expansion.range);
    let last_distorted_index = selected_index
        .saturating_add(expansion.range)
        .min(last_index);

    let steps_before = (selected_index - first_index) as f64;
    let steps_after = (last_distorted_index - selected_index) as f64;
    let first_offset = (selected.offset - expansion.step * steps_before).max(earliest.offset);
    let last_offset = (selected.offset + expansion.step * steps_after).min(latest.offset);

    rebuilt.first_distorted = Some(TimeMappingPoint::new(
        datetime_to_unix_seconds(source.date_at(first_index)),
        first_offset,
        Some(first_index),
    ));
    rebuilt.last_distorted = Some(TimeMappingPoint::new(
        datetime_to_unix_seconds(source.date_at(last_distorted_index)),
        last_offset,
        Some(last_distorted_index),
    ));

    Ok(rebuilt)
}
