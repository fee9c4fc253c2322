use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::SliderGeometry;
use crate::interaction::TrackingPhase;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderContext {
    pub geometry: SliderGeometry,
    pub date_count: usize,
    pub selected_index: Option<usize>,
    pub expanded: bool,
    pub distortion_active: bool,
    pub phase: TrackingPhase,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    SourceChanged { date_count: usize },
    GeometryChanged { extent: f64 },
    SelectionChanged { index: Option<usize> },
    Expanded,
    Collapsed,
    /// The pointer moved over `date`, which snapped to `index`.
    Hovered { date: DateTime<Utc>, index: usize },
    /// The user settled on the date at `index`.
    Selected { date: DateTime<Utc>, index: usize },
    /// The UI should collapse the control after this delay.
    CloseScheduled { delay_seconds: f64 },
}

/// Hook interface for hosts that want to follow the slider.
///
/// Observers see events and context but cannot mutate engine state.
pub trait SliderObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SliderEvent, context: SliderContext);
}
