use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingPhase {
    Idle,
    /// A pointer is down and being followed.
    Tracking,
    /// Tracking ended, the UI is animating towards the snap target.
    Snapping,
}

/// Host-tunable tracking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingBehavior {
    /// Keep tracking after the pointer leaves the control frame.
    pub allow_track_outside_control: bool,
    /// Delay between the end of an interaction and collapsing the control.
    /// `None` collapses immediately.
    pub close_delay_seconds: Option<f64>,
}

impl Default for TrackingBehavior {
    fn default() -> Self {
        Self {
            allow_track_outside_control: true,
            close_delay_seconds: Some(0.5),
        }
    }
}

impl TrackingBehavior {
    pub fn validate(self) -> SliderResult<Self> {
        if let Some(delay) = self.close_delay_seconds {
            if !delay.is_finite() || delay < 0.0 {
                return Err(SliderError::InvalidData(
                    "close delay must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

/// Date under the pointer and the index it snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    pub offset: f64,
    pub date: DateTime<Utc>,
    pub index: usize,
}

/// Where the selected tick settles once tracking ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub index: usize,
    pub date: DateTime<Utc>,
    pub offset: f64,
}

/// Outcome of one tracking step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingUpdate {
    pub keep_tracking: bool,
    pub hover: Option<Hover>,
}

impl TrackingUpdate {
    #[must_use]
    pub fn stopped() -> Self {
        Self {
            keep_tracking: false,
            hover: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingState {
    phase: TrackingPhase,
    behavior: TrackingBehavior,
    expanded: bool,
    last_offset: Option<f64>,
    hover: Option<Hover>,
}

impl Default for TrackingState {
    fn default() -> Self {
        Self {
            phase: TrackingPhase::Idle,
            behavior: TrackingBehavior::default(),
            expanded: false,
            last_offset: None,
            hover: None,
        }
    }
}

impl TrackingState {
    #[must_use]
    pub fn new(behavior: TrackingBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(self) -> TrackingPhase {
        self.phase
    }

    #[must_use]
    pub fn behavior(self) -> TrackingBehavior {
        self.behavior
    }

    pub fn set_behavior(&mut self, behavior: TrackingBehavior) {
        self.behavior = behavior;
    }

    /// The magnified presentation is shown while the control is expanded.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn last_offset(self) -> Option<f64> {
        self.last_offset
    }

    #[must_use]
    pub fn hover(self) -> Option<Hover> {
        self.hover
    }

    /// Whether tracking continues for a pointer that is (or is not) inside the frame.
    #[must_use]
    pub fn keeps_tracking(self, in_bounds: bool) -> bool {
        self.behavior.allow_track_outside_control || in_bounds
    }

    pub fn on_track_start(&mut self) {
        self.phase = TrackingPhase::Tracking;
        self.expanded = true;
    }

    pub fn on_track_move(&mut self, offset: f64) {
        self.last_offset = Some(offset);
    }

    pub fn set_hover(&mut self, hover: Option<Hover>) {
        self.hover = hover;
    }

    pub fn on_track_end(&mut self) {
        self.phase = TrackingPhase::Snapping;
    }

    pub fn on_track_cancel(&mut self) {
        self.phase = TrackingPhase::Idle;
    }

    /// Leaves the expanded presentation and forgets the pointer.
    pub fn collapse(&mut self) {
        self.phase = TrackingPhase::Idle;
        self.expanded = false;
        self.last_offset = None;
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{TrackingBehavior, TrackingPhase, TrackingState};

    #[test]
    fn track_cycle_moves_through_phases() {
        let mut state = TrackingState::default();
        state.on_track_start();
        assert_eq!(state.phase(), TrackingPhase::Tracking);
        assert!(state.is_expanded());

        state.on_track_move(120.0);
        state.on_track_end();
        assert_eq!(state.phase(), TrackingPhase::Snapping);
        assert!(state.is_expanded());

        state.collapse();
        assert_eq!(state.phase(), TrackingPhase::Idle);
        assert!(!state.is_expanded());
        assert_eq!(state.last_offset(), None);
    }

    #[test]
    fn out_of_bounds_tracking_follows_behavior() {
        let confined = TrackingState::new(TrackingBehavior {
            allow_track_outside_control: false,
            close_delay_seconds: None,
        });
        assert!(confined.keeps_tracking(true));
        assert!(!confined.keeps_tracking(false));
        assert!(TrackingState::default().keeps_tracking(false));
    }

    #[test]
    fn negative_close_delay_is_rejected() {
        let behavior = TrackingBehavior {
            allow_track_outside_control: true,
            close_delay_seconds: Some(-1.0),
        };
        assert!(behavior.validate().is_err());
    }
}
