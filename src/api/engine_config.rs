use serde::{Deserialize, Serialize};

use crate::core::{
    DATA_SOURCE_MAX_RECORD_COUNT, ExpansionConfig, Insets, InverseMappingPolicy, SliderAxis,
    SliderGeometry,
};
use crate::error::{SliderError, SliderResult};
use crate::interaction::TrackingBehavior;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load slider setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub geometry: SliderGeometry,
    #[serde(default)]
    pub expansion: ExpansionConfig,
    #[serde(default)]
    pub tracking: TrackingBehavior,
    #[serde(default)]
    pub inverse_mapping: InverseMappingPolicy,
    #[serde(default = "default_max_record_count")]
    pub max_record_count: usize,
}

/// The default frame is zero-sized and smaller than its insets, so it does
/// not validate; hosts supply the real frame through [`SliderConfig::new`].
impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(SliderGeometry::default())
    }
}

impl SliderConfig {
    #[must_use]
    pub fn new(geometry: SliderGeometry) -> Self {
        Self {
            geometry,
            expansion: ExpansionConfig::default(),
            tracking: TrackingBehavior::default(),
            inverse_mapping: InverseMappingPolicy::default(),
            max_record_count: default_max_record_count(),
        }
    }

    /// Sets the axis along which offsets are measured.
    #[must_use]
    pub fn with_axis(mut self, axis: SliderAxis) -> Self {
        self.geometry.axis = axis;
        self
    }

    /// Sets the data insets of the control.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.geometry.insets = insets;
        self
    }

    /// Sets the magnified window around the selection.
    #[must_use]
    pub fn with_expansion(mut self, range: usize, step: f64) -> Self {
        self.expansion = ExpansionConfig::new(range, step);
        self
    }

    /// Sets tracking behavior (out-of-frame tracking and close delay).
    #[must_use]
    pub fn with_tracking_behavior(mut self, behavior: TrackingBehavior) -> Self {
        self.tracking = behavior;
        self
    }

    /// Sets how tracked offsets are converted back into dates.
    #[must_use]
    pub fn with_inverse_mapping(mut self, policy: InverseMappingPolicy) -> Self {
        self.inverse_mapping = policy;
        self
    }

    /// Sets the largest accepted date source.
    #[must_use]
    pub fn with_max_record_count(mut self, max_record_count: usize) -> Self {
        self.max_record_count = max_record_count;
        self
    }

    pub fn validate(self) -> SliderResult<Self> {
        self.geometry.validate()?;
        self.expansion.validate()?;
        self.tracking.validate()?;
        if self.max_record_count == 0 {
            return Err(SliderError::InvalidData(
                "max record count must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_max_record_count() -> usize {
    DATA_SOURCE_MAX_RECORD_COUNT
}
