mod data_controller;
mod engine;
mod engine_config;
mod json_contract;
mod mapping_queries;
mod observer_dispatch;
mod observer_registry;
mod tick_layout;
mod tracking_controller;

pub use engine::TimeSliderEngine;
pub use engine_config::SliderConfig;
pub use json_contract::{
    SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshot, SliderSnapshotJsonContractV1,
};
pub use tick_layout::TickPlacement;

pub use crate::extensions::{SliderContext, SliderEvent, SliderObserver};
