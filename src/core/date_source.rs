use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Largest date source the mapping engine accepts.
pub const DATA_SOURCE_MAX_RECORD_COUNT: usize = 1000;

/// Read-only, ascending sequence of dates queried by index.
///
/// Implementations must return dates in ascending order and must accept
/// every index in `0..count()`.
pub trait DateSource {
    fn count(&self) -> usize;
    fn date_at(&self, index: usize) -> DateTime<Utc>;

    #[must_use]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[must_use]
    fn last_index(&self) -> Option<usize> {
        self.count().checked_sub(1)
    }
}

impl DateSource for [DateTime<Utc>] {
    fn count(&self) -> usize {
        self.len()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self[index]
    }
}

impl DateSource for Vec<DateTime<Utc>> {
    fn count(&self) -> usize {
        self.len()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self[index]
    }
}

impl<S: DateSource + ?Sized> DateSource for &S {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        (**self).date_at(index)
    }
}

/// Rejects sources larger than `max`.
pub fn ensure_record_count<S: DateSource + ?Sized>(source: &S, max: usize) -> SliderResult<()> {
    let count = source.count();
    if count > max {
        return Err(SliderError::DateSourceTooLarge { count, max });
    }
    Ok(())
}

/// Owned date source used when the host does not supply its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSeries {
    dates: Vec<DateTime<Utc>>,
}

impl DateSeries {
    /// Builds a series from dates that are already ascending.
    pub fn new(dates: Vec<DateTime<Utc>>) -> SliderResult<Self> {
        if let Some(position) = dates.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(SliderError::InvalidData(format!(
                "dates must be ascending, index {position} precedes an earlier date"
            )));
        }
        Ok(Self { dates })
    }

    /// Builds a series from dates in any order.
    #[must_use]
    pub fn from_unsorted(mut dates: Vec<DateTime<Utc>>) -> Self {
        dates.sort_unstable();
        Self { dates }
    }

    #[must_use]
    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<DateTime<Utc>> {
        self.dates
    }
}

impl DateSource for DateSeries {
    fn count(&self) -> usize {
        self.dates.len()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self.dates[index]
    }
}
