use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Direction of the offset axis of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SliderAxis {
    /// Offsets grow downwards along the control height.
    #[default]
    Vertical,
    /// Offsets grow rightwards along the control width.
    Horizontal,
}

/// Margins between the control frame and its data area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub width: f64,
    pub height: f64,
}

impl Insets {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(0.0, 15.0)
    }
}

/// Frame size, axis and insets of the control, supplied by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderGeometry {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub axis: SliderAxis,
    #[serde(default)]
    pub insets: Insets,
}

impl Default for SliderGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl SliderGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            axis: SliderAxis::Vertical,
            insets: Insets::default(),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: SliderAxis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Length of the control along its offset axis.
    #[must_use]
    pub fn extent(self) -> f64 {
        match self.axis {
            SliderAxis::Vertical => self.height,
            SliderAxis::Horizontal => self.width,
        }
    }

    /// Inset applied along the offset axis.
    #[must_use]
    pub fn axis_inset(self) -> f64 {
        match self.axis {
            SliderAxis::Vertical => self.insets.height,
            SliderAxis::Horizontal => self.insets.width,
        }
    }

    /// Offset of the earliest date.
    #[must_use]
    pub fn lowest_offset(self) -> f64 {
        self.axis_inset()
    }

    /// Offset of the latest date. The inset is taken twice at the far end.
    #[must_use]
    pub fn highest_offset(self) -> f64 {
        self.extent() - 2.0 * self.axis_inset()
    }

    pub fn validate(self) -> SliderResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(SliderError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        if !self.insets.width.is_finite()
            || !self.insets.height.is_finite()
            || self.insets.width < 0.0
            || self.insets.height < 0.0
        {
            return Err(SliderError::InvalidData(
                "slider insets must be finite and >= 0".to_owned(),
            ));
        }
        // Insets larger than the frame would put Latest before Earliest.
        if self.highest_offset() < self.lowest_offset() {
            return Err(SliderError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Magnified window around the selection.
///
/// `range` ticks on each side of the selected tick are spaced `step` units
/// apart instead of following the linear time scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpansionConfig {
    pub range: usize,
    pub step: f64,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            range: 5,
            step: 14.0,
        }
    }
}

impl ExpansionConfig {
    #[must_use]
    pub const fn new(range: usize, step: f64) -> Self {
        Self { range, step }
    }

    /// Distortion is only worth applying when the source is larger than the
    /// magnified window on both sides.
    #[must_use]
    pub fn is_active(self, date_count: usize) -> bool {
        self.range
            .checked_mul(2)
            .is_some_and(|window| date_count > window)
    }

    pub fn validate(self) -> SliderResult<Self> {
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(SliderError::InvalidData(
                "expansion step must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
