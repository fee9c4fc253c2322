//! time-slider: coordinate/date mapping engine for touch time-selection sliders.
//!
//! The crate maps screen offsets to dates and back through a piecewise-linear
//! transfer function that magnifies the ticks around the selection. Drawing,
//! gestures and animation stay with the host UI layer, which feeds the engine
//! offsets and geometry and reads back dates, offsets and tick kinds.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{SliderConfig, TimeSliderEngine};
pub use error::{SliderError, SliderResult};
