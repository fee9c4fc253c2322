//! Offset/date conversion over a [`BreakPointSet`].
//!
//! Every query is total: a set without end points yields `None`, while
//! degenerate segments fall back to the zero-slope and epoch sentinels of
//! [`TimeMappingPoint`](crate::core::TimeMappingPoint).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::break_points::BreakPointSet;
use crate::core::date_source::DateSource;
use crate::core::mapping_point::TimeMappingPoint;
use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};

/// Mapping regime of a tick relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointKind {
    /// No distortion applies, the time scale is linear.
    Linear,
    /// First, last or selected tick, always placed linearly.
    Anchored,
    /// Compressed segment between Earliest and FirstDistorted.
    FloatLeft,
    /// Evenly spaced magnified window around the selection.
    LinearMiddle,
    /// Compressed segment between LastDistorted and Latest.
    FloatRight,
}

/// How a tracked offset is turned back into a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InverseMappingPolicy {
    /// Global Earliest→Latest line, even while the window is magnified.
    #[default]
    Linear,
    /// Follows the distorted segments, so picks inside the magnified window
    /// land on the tick drawn under the pointer.
    Distorted,
}

/// Classifies `index` against the current selection.
///
/// Only an expanded control with a distorted window produces anything but
/// [`PointKind::Linear`].
#[must_use]
pub fn classify(break_points: &BreakPointSet, index: usize, expanded: bool) -> PointKind {
    if !expanded {
        return PointKind::Linear;
    }
    let Some(selected_index) = break_points.selected().and_then(|point| point.index) else {
        return PointKind::Linear;
    };
    let Some((first, last)) = break_points.distorted_window() else {
        return PointKind::Linear;
    };
    let (Some(first_index), Some(last_index)) = (first.index, last.index) else {
        return PointKind::Linear;
    };
    let latest_index = break_points.latest().and_then(|point| point.index);

    if index == 0 || index == selected_index || Some(index) == latest_index {
        PointKind::Anchored
    } else if (first_index..=last_index).contains(&index) {
        PointKind::LinearMiddle
    } else if index < first_index {
        PointKind::FloatLeft
    } else {
        PointKind::FloatRight
    }
}

/// Time (seconds) at `offset` on the undistorted Earliest→Latest line.
#[must_use]
pub fn linear_time_from(break_points: &BreakPointSet, offset: f64) -> Option<f64> {
    let (earliest, latest) = break_points.ends()?;
    let slope = earliest.slope_to(latest);
    Some(earliest.project_offset(offset, slope).time)
}

#[must_use]
pub fn linear_date_from(break_points: &BreakPointSet, offset: f64) -> Option<DateTime<Utc>> {
    unix_seconds_to_datetime(linear_time_from(break_points, offset)?)
}

/// Inverse of the distorted forward mapping.
///
/// Offsets outside the end points clamp to the first/last date. Inside the
/// magnified window the offset is interpolated by index and resolved to the
/// date stored at that index.
#[must_use]
pub fn distorted_date_from<S: DateSource + ?Sized>(
    break_points: &BreakPointSet,
    source: &S,
    offset: f64,
) -> Option<DateTime<Utc>> {
    let (earliest, latest) = break_points.ends()?;
    if offset < earliest.offset {
        return end_date(source, earliest);
    }

    if let Some(first) = break_points.first_distorted() {
        if offset < first.offset {
            let slope = earliest.slope_to(first);
            return unix_seconds_to_datetime(earliest.project_offset(offset, slope).time);
        }
    }

    if let Some((first, last)) = break_points.distorted_window() {
        if offset < last.offset {
            let (first_index, last_index) = (first.index?, last.index?);
            let span = last.offset - first.offset;
            let fraction = if span == 0.0 {
                0.0
            } else {
                (offset - first.offset) / span
            };
            let steps = (fraction * (last_index - first_index) as f64).round().max(0.0) as usize;
            let index = (first_index + steps).min(last_index);
            return Some(source.date_at(index));
        }
    }

    if offset < latest.offset {
        let left = break_points.last_distorted().unwrap_or(earliest);
        let slope = left.slope_to(latest);
        return unix_seconds_to_datetime(left.project_offset(offset, slope).time);
    }

    end_date(source, latest)
}

/// Date stored at an end point, read from the source so it keeps its full
/// precision.
fn end_date<S: DateSource + ?Sized>(
    source: &S,
    point: TimeMappingPoint,
) -> Option<DateTime<Utc>> {
    match point.index {
        Some(index) if index < source.count() => Some(source.date_at(index)),
        _ => unix_seconds_to_datetime(point.time),
    }
}

/// Offset to date through the chosen inverse policy.
///
/// Offsets at or past Earliest/Latest resolve to the first/last stored date
/// under both policies.
#[must_use]
pub fn offset_to_date<S: DateSource + ?Sized>(
    break_points: &BreakPointSet,
    source: &S,
    offset: f64,
    policy: InverseMappingPolicy,
) -> Option<DateTime<Utc>> {
    let (earliest, latest) = break_points.ends()?;
    if offset <= earliest.offset {
        return end_date(source, earliest);
    }
    if offset >= latest.offset {
        return end_date(source, latest);
    }
    match policy {
        InverseMappingPolicy::Linear => linear_date_from(break_points, offset),
        InverseMappingPolicy::Distorted => distorted_date_from(break_points, source, offset),
    }
}

/// Offset of `date` on the undistorted Earliest→Latest line.
#[must_use]
pub fn linear_offset_from(break_points: &BreakPointSet, date: DateTime<Utc>) -> Option<f64> {
    let (earliest, latest) = break_points.ends()?;
    let slope = earliest.slope_to(latest);
    Some(
        earliest
            .project_time(datetime_to_unix_seconds(date), slope)
            .offset,
    )
}

/// Offset of the tick at `index` holding `date`, honoring distortion.
///
/// Inside the magnified window ticks are spaced `expansion_step` apart by
/// index, regardless of their dates.
#[must_use]
pub fn distorted_offset_from(
    break_points: &BreakPointSet,
    date: DateTime<Utc>,
    index: usize,
    expanded: bool,
    expansion_step: f64,
) -> Option<f64> {
    let (left, right) = match classify(break_points, index, expanded) {
        PointKind::Anchored | PointKind::Linear => {
            return linear_offset_from(break_points, date);
        }
        PointKind::LinearMiddle => {
            let selected = break_points.selected()?;
            let distance = index as f64 - selected.index? as f64;
            return Some(selected.offset + distance * expansion_step);
        }
        PointKind::FloatLeft => (break_points.earliest()?, break_points.first_distorted()?),
        PointKind::FloatRight => (break_points.last_distorted()?, break_points.latest()?),
    };
    let slope = left.slope_to(right);
    Some(
        left.project_time(datetime_to_unix_seconds(date), slope)
            .offset,
    )
}

/// Date to offset, alias of [`distorted_offset_from`] which already falls
/// back to the linear mapping when no distortion applies.
#[must_use]
pub fn date_to_offset(
    break_points: &BreakPointSet,
    date: DateTime<Utc>,
    index: usize,
    expanded: bool,
    expansion_step: f64,
) -> Option<f64> {
    distorted_offset_from(break_points, date, index, expanded, expansion_step)
}
