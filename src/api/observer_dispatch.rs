use crate::core::DateSource;
use crate::extensions::SliderContext;

use super::{SliderEvent, TimeSliderEngine};

impl<S: DateSource> TimeSliderEngine<S> {
    pub(super) fn observer_context(&self) -> SliderContext {
        SliderContext {
            geometry: self.config.geometry,
            date_count: self.source.count(),
            selected_index: self.selected_index,
            expanded: self.tracking.is_expanded(),
            distortion_active: self.is_distortion_active(),
            phase: self.tracking.phase(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SliderEvent) {
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
