use serde::{Deserialize, Serialize};

use crate::core::{DateSource, PointKind};

use super::TimeSliderEngine;

/// Position and regime of one tick for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPlacement {
    pub index: usize,
    pub offset: f64,
    pub kind: PointKind,
    /// `false` when the offset falls outside the Earliest..=Latest span; the
    /// UI hides such ticks.
    pub in_bounds: bool,
}

impl<S: DateSource> TimeSliderEngine<S> {
    /// Places every tick of the source. Empty while the mapping is unusable.
    #[must_use]
    pub fn tick_placements(&self) -> Vec<TickPlacement> {
        let Some((earliest, latest)) = self.break_points.ends() else {
            return Vec::new();
        };
        let span = earliest.offset..=latest.offset;

        (0..self.source.count())
            .filter_map(|index| {
                let offset = self.offset_for_index(index)?;
                Some(TickPlacement {
                    index,
                    offset,
                    kind: self.classify(index),
                    in_bounds: span.contains(&offset),
                })
            })
            .collect()
    }
}
