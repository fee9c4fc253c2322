use crate::core::DateSource;
use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderObserver;

use super::TimeSliderEngine;

impl<S: DateSource> TimeSliderEngine<S> {
    /// Adds an observer; it receives every later [`SliderEvent`](super::SliderEvent).
    pub fn register_observer(&mut self, observer: Box<dyn SliderObserver>) -> SliderResult<()> {
        self.ensure_observer_id_available(observer.id())?;
        self.observers.push(observer);
        Ok(())
    }

    /// Detaches the observer registered as `observer_id`, if any.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != observer_id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    fn ensure_observer_id_available(&self, observer_id: &str) -> SliderResult<()> {
        if observer_id.is_empty() {
            return Err(SliderError::InvalidData(
                "slider observers need a non-empty id".to_owned(),
            ));
        }
        if self.has_observer(observer_id) {
            return Err(SliderError::InvalidData(format!(
                "slider observer `{observer_id}` is already attached"
            )));
        }
        Ok(())
    }
}
