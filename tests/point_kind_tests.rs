use chrono::{DateTime, Duration, TimeZone, Utc};
use time_slider::core::{
    BreakPointSet, DATA_SOURCE_MAX_RECORD_COUNT, ExpansionConfig, PointKind, SliderGeometry,
    classify, rebuild_end_points, rebuild_mid_points,
};

fn daily(count: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2015, 5, 11, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| start + Duration::days(i as i64))
        .collect()
}

fn selected_set(count: usize, selected: usize) -> BreakPointSet {
    let dates = daily(count);
    let ends = rebuild_end_points(
        dates.as_slice(),
        SliderGeometry::new(44.0, 430.0),
        DATA_SOURCE_MAX_RECORD_COUNT,
    )
    .expect("end points");
    rebuild_mid_points(
        ends,
        Some(selected),
        dates.as_slice(),
        ExpansionConfig::new(5, 14.0),
    )
    .expect("mid points")
}

#[test]
fn hundred_days_selected_in_the_middle() {
    let set = selected_set(100, 50);

    assert_eq!(set.first_distorted().and_then(|p| p.index), Some(45));
    assert_eq!(set.last_distorted().and_then(|p| p.index), Some(55));
    for index in 46..=54 {
        if index == 50 {
            continue;
        }
        assert_eq!(classify(&set, index, true), PointKind::LinearMiddle, "{index}");
    }
    assert_eq!(classify(&set, 45, true), PointKind::LinearMiddle);
    assert_eq!(classify(&set, 55, true), PointKind::LinearMiddle);
    assert_eq!(classify(&set, 40, true), PointKind::FloatLeft);
    assert_eq!(classify(&set, 1, true), PointKind::FloatLeft);
    assert_eq!(classify(&set, 60, true), PointKind::FloatRight);
    assert_eq!(classify(&set, 98, true), PointKind::FloatRight);
}

#[test]
fn ends_and_selection_are_anchored() {
    let set = selected_set(100, 50);
    assert_eq!(classify(&set, 0, true), PointKind::Anchored);
    assert_eq!(classify(&set, 50, true), PointKind::Anchored);
    assert_eq!(classify(&set, 99, true), PointKind::Anchored);
}

#[test]
fn collapsed_control_is_linear_everywhere() {
    let set = selected_set(100, 50);
    for index in 0..100 {
        assert_eq!(classify(&set, index, false), PointKind::Linear);
    }
}

#[test]
fn inactive_distortion_is_linear_everywhere() {
    let set = selected_set(10, 4);
    for index in 0..10 {
        assert_eq!(classify(&set, index, true), PointKind::Linear);
    }
}

#[test]
fn missing_selection_is_linear() {
    let set = BreakPointSet::default();
    assert_eq!(classify(&set, 0, true), PointKind::Linear);
    assert_eq!(classify(&set, 7, true), PointKind::Linear);
}
