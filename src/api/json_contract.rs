use serde::{Deserialize, Serialize};

use crate::core::{BreakPointSet, DateSource, SliderGeometry};
use crate::error::{SliderError, SliderResult};
use crate::interaction::TrackingPhase;

use super::TimeSliderEngine;

pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the engine state, for diagnostics and fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub date_count: usize,
    pub geometry: SliderGeometry,
    pub break_points: BreakPointSet,
    pub selected_index: Option<usize>,
    pub expanded: bool,
    pub distortion_active: bool,
    pub phase: TrackingPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

impl<S: DateSource> TimeSliderEngine<S> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            date_count: self.source.count(),
            geometry: self.config.geometry,
            break_points: self.break_points,
            selected_index: self.selected_index,
            expanded: self.tracking.is_expanded(),
            distortion_active: self.is_distortion_active(),
            phase: self.tracking.phase(),
        }
    }
}

impl SliderSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderSnapshotJsonContractV1 {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SliderSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SliderSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
