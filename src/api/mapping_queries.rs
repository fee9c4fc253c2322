use chrono::{DateTime, Utc};

use crate::core::{
    DateSource, PointKind, classify, distorted_date_from, distorted_offset_from,
    find_nearest_date, linear_date_from, linear_offset_from, offset_to_date,
};
use crate::error::SliderResult;
use crate::interaction::SnapTarget;

use super::TimeSliderEngine;

impl<S: DateSource> TimeSliderEngine<S> {
    /// Date under `offset`, through the configured inverse policy.
    #[must_use]
    pub fn offset_to_date(&self, offset: f64) -> Option<DateTime<Utc>> {
        offset_to_date(
            &self.break_points,
            &self.source,
            offset,
            self.config.inverse_mapping,
        )
    }

    #[must_use]
    pub fn linear_date_from(&self, offset: f64) -> Option<DateTime<Utc>> {
        linear_date_from(&self.break_points, offset)
    }

    #[must_use]
    pub fn distorted_date_from(&self, offset: f64) -> Option<DateTime<Utc>> {
        distorted_date_from(&self.break_points, &self.source, offset)
    }

    #[must_use]
    pub fn linear_offset_from(&self, date: DateTime<Utc>) -> Option<f64> {
        linear_offset_from(&self.break_points, date)
    }

    /// Offset of `date` drawn as the tick at `index`.
    #[must_use]
    pub fn date_to_offset(&self, date: DateTime<Utc>, index: usize) -> Option<f64> {
        distorted_offset_from(
            &self.break_points,
            date,
            index,
            self.tracking.is_expanded(),
            self.config.expansion.step,
        )
    }

    /// Offset of the tick at `index`, `None` past the end of the source.
    #[must_use]
    pub fn offset_for_index(&self, index: usize) -> Option<f64> {
        if index >= self.source.count() {
            return None;
        }
        self.date_to_offset(self.source.date_at(index), index)
    }

    pub fn find_nearest_date(&self, target: DateTime<Utc>) -> SliderResult<usize> {
        find_nearest_date(&self.source, target, self.config.max_record_count)
    }

    #[must_use]
    pub fn classify(&self, index: usize) -> PointKind {
        classify(&self.break_points, index, self.tracking.is_expanded())
    }

    /// Where the selected tick belongs under the current mapping.
    #[must_use]
    pub fn snap_target(&self) -> Option<SnapTarget> {
        let index = self.selected_index?;
        let date = self.source.date_at(index);
        let offset = self.date_to_offset(date, index)?;
        Some(SnapTarget {
            index,
            date,
            offset,
        })
    }
}
