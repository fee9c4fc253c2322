//! Optional hooks for hosts embedding the slider.

pub mod observers;

pub use observers::{SliderContext, SliderEvent, SliderObserver};
