use tracing::{debug, trace, warn};

use crate::core::DateSource;
use crate::error::SliderResult;
use crate::interaction::{Hover, SnapTarget, TrackingUpdate};

use super::{SliderEvent, TimeSliderEngine};

impl<S: DateSource> TimeSliderEngine<S> {
    /// Starts following a pointer at `offset` and expands the control.
    pub fn begin_tracking(&mut self, offset: f64) -> SliderResult<TrackingUpdate> {
        let was_expanded = self.tracking.is_expanded();
        self.tracking.on_track_start();
        if !was_expanded {
            debug!(offset, "slider expanded");
            self.emit_event(SliderEvent::Expanded);
        }
        self.continue_tracking(offset, true)
    }

    /// Moves the selection to the date under `offset`.
    ///
    /// The offset is converted through the configured inverse policy, then
    /// snapped with [`find_nearest_date`](crate::core::find_nearest_date).
    /// Tracking stops (and a close is requested) when the source is not
    /// usable, or when the pointer left the frame and out-of-frame tracking
    /// is disabled.
    pub fn continue_tracking(&mut self, offset: f64, in_bounds: bool) -> SliderResult<TrackingUpdate> {
        let Some(date) = self.offset_to_date(offset) else {
            warn!(
                date_count = self.source.count(),
                offset, "tracking rejected, date source is not usable"
            );
            self.tracking.on_track_cancel();
            self.close_later();
            return Ok(TrackingUpdate::stopped());
        };

        self.tracking.on_track_move(offset);
        let index = self.find_nearest_date(date)?;
        self.set_selected_index(Some(index))?;

        let hover = Hover {
            offset,
            date,
            index,
        };
        self.tracking.set_hover(Some(hover));
        trace!(offset, index, %date, "tracking update");
        self.emit_event(SliderEvent::Hovered { date, index });

        let keep_tracking = self.tracking.keeps_tracking(in_bounds);
        if !keep_tracking {
            debug!(offset, "pointer left the control, tracking stopped");
            self.tracking.on_track_cancel();
            self.close_later();
        }
        Ok(TrackingUpdate {
            keep_tracking,
            hover: Some(hover),
        })
    }

    /// Ends tracking and returns where the selected tick should snap to.
    ///
    /// The UI animates towards the target and calls [`Self::finish_snap`]
    /// once it settles. Without a selection the control closes instead.
    pub fn end_tracking(&mut self) -> Option<SnapTarget> {
        let Some(target) = self.snap_target() else {
            self.tracking.on_track_cancel();
            self.close_later();
            return None;
        };
        self.tracking.on_track_end();
        debug!(index = target.index, offset = target.offset, "tracking ended");
        self.emit_event(SliderEvent::Selected {
            date: target.date,
            index: target.index,
        });
        Some(target)
    }

    /// Snap animation settled.
    pub fn finish_snap(&mut self) {
        self.collapse();
    }

    pub fn cancel_tracking(&mut self) {
        self.tracking.on_track_cancel();
        self.close_later();
    }

    /// Leaves the expanded presentation.
    pub fn collapse(&mut self) {
        let was_expanded = self.tracking.is_expanded();
        self.tracking.collapse();
        if was_expanded {
            debug!("slider collapsed");
            self.emit_event(SliderEvent::Collapsed);
        }
    }

    /// Reports the selection and schedules (or performs) the collapse.
    fn close_later(&mut self) {
        if let Some(index) = self.selected_index {
            let date = self.source.date_at(index);
            self.emit_event(SliderEvent::Selected { date, index });
        }
        match self.config.tracking.close_delay_seconds {
            Some(delay_seconds) => {
                self.emit_event(SliderEvent::CloseScheduled { delay_seconds });
            }
            None => self.collapse(),
        }
    }
}
