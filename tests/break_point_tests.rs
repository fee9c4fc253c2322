use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use time_slider::SliderError;
use time_slider::core::{
    BreakPoint, BreakPointSet, DATA_SOURCE_MAX_RECORD_COUNT, ExpansionConfig, Insets, SliderAxis,
    SliderGeometry, rebuild_end_points, rebuild_mid_points,
};

fn daily(count: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2015, 5, 11, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| start + Duration::days(i as i64))
        .collect()
}

fn geometry() -> SliderGeometry {
    SliderGeometry::new(44.0, 430.0)
}

fn ends_for(dates: &[DateTime<Utc>]) -> BreakPointSet {
    rebuild_end_points(dates, geometry(), DATA_SOURCE_MAX_RECORD_COUNT).expect("end points")
}

fn selected_offset(index: usize, last_index: usize) -> f64 {
    15.0 + 385.0 * index as f64 / last_index as f64
}

#[test]
fn two_dates_or_fewer_leave_the_set_empty() {
    for count in 0..=2 {
        let set = ends_for(&daily(count));
        assert!(set.is_empty(), "count {count}");
        assert!(!set.is_usable());
    }
}

#[test]
fn end_points_span_the_inset_data_area() {
    let dates = daily(3);
    let set = ends_for(&dates);

    let earliest = set.earliest().expect("earliest");
    let latest = set.latest().expect("latest");
    assert_eq!(earliest.index, Some(0));
    assert_eq!(latest.index, Some(2));
    assert_eq!(earliest.offset, 15.0);
    // The inset is subtracted twice from the far end.
    assert_eq!(latest.offset, 400.0);
    assert_eq!(set.selected(), None);
    assert_eq!(set.first_distorted(), None);
    assert_eq!(set.last_distorted(), None);
}

#[test]
fn horizontal_axis_uses_width_and_width_inset() {
    let dates = daily(10);
    let geometry = SliderGeometry::new(300.0, 44.0)
        .with_axis(SliderAxis::Horizontal)
        .with_insets(Insets::new(10.0, 15.0));
    let set = rebuild_end_points(dates.as_slice(), geometry, DATA_SOURCE_MAX_RECORD_COUNT)
        .expect("end points");
    assert_eq!(set.earliest().map(|p| p.offset), Some(10.0));
    assert_eq!(set.latest().map(|p| p.offset), Some(280.0));
}

#[test]
fn oversized_source_produces_no_break_points() {
    let dates = daily(DATA_SOURCE_MAX_RECORD_COUNT + 1);
    let result = rebuild_end_points(dates.as_slice(), geometry(), DATA_SOURCE_MAX_RECORD_COUNT);
    assert!(matches!(
        result,
        Err(SliderError::DateSourceTooLarge { count: 1001, .. })
    ));
}

#[test]
fn selection_builds_a_magnified_window() {
    let dates = daily(100);
    let set = rebuild_mid_points(
        ends_for(&dates),
        Some(50),
        dates.as_slice(),
        ExpansionConfig::new(5, 14.0),
    )
    .expect("mid points");

    let selected = set.selected().expect("selected");
    let first = set.first_distorted().expect("first distorted");
    let last = set.last_distorted().expect("last distorted");

    assert_eq!(selected.index, Some(50));
    assert_eq!(first.index, Some(45));
    assert_eq!(last.index, Some(55));
    assert_relative_eq!(selected.offset, selected_offset(50, 99), epsilon = 1e-9);
    assert_relative_eq!(first.offset, selected.offset - 70.0, epsilon = 1e-9);
    assert_relative_eq!(last.offset, selected.offset + 70.0, epsilon = 1e-9);
    assert_eq!(set.get(BreakPoint::FirstDistorted), Some(first));
}

#[test]
fn window_is_clamped_at_the_extremes() {
    let dates = daily(100);
    let ends = ends_for(&dates);
    let expansion = ExpansionConfig::new(5, 14.0);

    let at_start =
        rebuild_mid_points(ends, Some(0), dates.as_slice(), expansion).expect("mid points");
    let first = at_start.first_distorted().expect("first distorted");
    let last = at_start.last_distorted().expect("last distorted");
    assert_eq!(first.index, Some(0));
    assert_eq!(first.offset, 15.0);
    assert_eq!(last.index, Some(5));
    assert_relative_eq!(last.offset, 85.0, epsilon = 1e-9);

    let near_start =
        rebuild_mid_points(ends, Some(2), dates.as_slice(), expansion).expect("mid points");
    let first = near_start.first_distorted().expect("first distorted");
    assert_eq!(first.index, Some(0));
    assert_eq!(first.offset, 15.0);

    let at_end =
        rebuild_mid_points(ends, Some(99), dates.as_slice(), expansion).expect("mid points");
    let first = at_end.first_distorted().expect("first distorted");
    let last = at_end.last_distorted().expect("last distorted");
    assert_eq!(first.index, Some(94));
    assert_relative_eq!(first.offset, 330.0, epsilon = 1e-9);
    assert_eq!(last.index, Some(99));
    assert_relative_eq!(last.offset, 400.0, epsilon = 1e-9);
    assert!(last.offset <= 400.0);
}

#[test]
fn small_sources_get_a_selection_without_distortion() {
    let dates = daily(10);
    let set = rebuild_mid_points(
        ends_for(&dates),
        Some(4),
        dates.as_slice(),
        ExpansionConfig::new(5, 14.0),
    )
    .expect("mid points");
    assert!(set.selected().is_some());
    assert_eq!(set.distorted_window(), None);
}

#[test]
fn clearing_the_selection_removes_every_mid_point() {
    let dates = daily(100);
    let expansion = ExpansionConfig::default();
    let selected = rebuild_mid_points(ends_for(&dates), Some(50), dates.as_slice(), expansion)
        .expect("mid points");
    let cleared =
        rebuild_mid_points(selected, None, dates.as_slice(), expansion).expect("mid points");
    assert_eq!(cleared, ends_for(&dates));
}

#[test]
fn unusable_set_ignores_the_selection() {
    let dates = daily(2);
    let set = rebuild_mid_points(
        BreakPointSet::default(),
        Some(1),
        dates.as_slice(),
        ExpansionConfig::default(),
    )
    .expect("mid points");
    assert!(set.is_empty());
}

#[test]
fn selection_outside_the_source_is_rejected() {
    let dates = daily(20);
    let result = rebuild_mid_points(
        ends_for(&dates),
        Some(20),
        dates.as_slice(),
        ExpansionConfig::default(),
    );
    assert!(matches!(
        result,
        Err(SliderError::IndexOutOfRange {
            index: 20,
            count: 20
        })
    ));
}
