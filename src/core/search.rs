use chrono::{DateTime, Utc};

use crate::core::date_source::{DateSource, ensure_record_count};
use crate::error::SliderResult;

/// Binary search for the index whose date is closest to `target`, biased
/// towards the past.
///
/// An exact match returns its index. Otherwise the search collapses onto the
/// last date before `target`, even when the following date is nearer in time.
/// Targets before the first date resolve to `0`, targets after the last date
/// to the last index. An empty source resolves to `0`.
pub fn find_nearest_date<S: DateSource + ?Sized>(
    source: &S,
    target: DateTime<Utc>,
    max_record_count: usize,
) -> SliderResult<usize> {
    ensure_record_count(source, max_record_count)?;

    let count = source.count();
    if count == 0 {
        return Ok(0);
    }

    let mut lower: isize = 0;
    let mut upper: isize = count as isize - 1;
    loop {
        // Integer division truncates towards zero, so `(0 + -1) / 2 == 0`.
        let current = (lower + upper) / 2;
        let date = source.date_at(current as usize);
        if date == target || lower > upper {
            return Ok(current as usize);
        }
        if date > target {
            upper = current - 1;
        } else {
            lower = current + 1;
        }
    }
}
