use serde::{Deserialize, Serialize};

/// A point of the offset/time transfer function.
///
/// `time` is in seconds since the Unix epoch, `offset` is a screen coordinate
/// along the slider axis. `index` is only set for points that correspond to
/// an entry of the date source; projected points carry no index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeMappingPoint {
    pub time: f64,
    pub offset: f64,
    pub index: Option<usize>,
}

impl TimeMappingPoint {
    #[must_use]
    pub const fn new(time: f64, offset: f64, index: Option<usize>) -> Self {
        Self {
            time,
            offset,
            index,
        }
    }

    /// Same point, anchored to a source index.
    #[must_use]
    pub const fn with_index(self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self
        }
    }

    /// Offset units per second between `self` and `other`.
    ///
    /// Coincident times yield `0.0`: the segment is vertical and callers
    /// treat a zero slope as "no mapping possible here".
    #[must_use]
    pub fn slope_to(self, other: Self) -> f64 {
        let time_delta = other.time - self.time;
        if time_delta == 0.0 {
            return 0.0;
        }
        (other.offset - self.offset) / time_delta
    }

    /// Point at `time` on the line through `self` with the given slope.
    #[must_use]
    pub fn project_time(self, time: f64, slope: f64) -> Self {
        Self::new(time, self.offset + slope * (time - self.time), None)
    }

    /// Point at `offset` on the line through `self` with the given slope.
    ///
    /// A zero slope has no inverse; the result then carries time `0.0` (the
    /// epoch) as a sentinel.
    #[must_use]
    pub fn project_offset(self, offset: f64, slope: f64) -> Self {
        let time = if slope == 0.0 {
            0.0
        } else {
            self.time + (offset - self.offset) / slope
        };
        Self::new(time, offset, None)
    }
}
