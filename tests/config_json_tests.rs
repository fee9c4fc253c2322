use time_slider::core::{InverseMappingPolicy, SliderAxis, SliderGeometry};
use time_slider::interaction::TrackingBehavior;
use time_slider::SliderConfig;

#[test]
fn config_round_trips_through_json() {
    let config = SliderConfig::new(SliderGeometry::new(320.0, 44.0))
        .with_axis(SliderAxis::Horizontal)
        .with_expansion(3, 20.0)
        .with_inverse_mapping(InverseMappingPolicy::Distorted)
        .with_tracking_behavior(TrackingBehavior {
            allow_track_outside_control: false,
            close_delay_seconds: None,
        })
        .with_max_record_count(500);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = SliderConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_gets_defaults() {
    let parsed =
        SliderConfig::from_json_str(r#"{"geometry":{"width":44.0,"height":430.0}}"#).expect("parse");
    assert_eq!(parsed, SliderConfig::new(SliderGeometry::new(44.0, 430.0)));
    assert_eq!(parsed.expansion.range, 5);
    assert_eq!(parsed.tracking.close_delay_seconds, Some(0.5));
    assert_eq!(parsed.inverse_mapping, InverseMappingPolicy::Linear);
    assert_eq!(parsed.max_record_count, 1000);
}

#[test]
fn invalid_values_are_rejected() {
    let negative_step = r#"{"geometry":{"width":44.0,"height":430.0},"expansion":{"range":5,"step":-1.0}}"#;
    assert!(SliderConfig::from_json_str(negative_step).is_err());

    let zero_records = r#"{"geometry":{"width":44.0,"height":430.0},"max_record_count":0}"#;
    assert!(SliderConfig::from_json_str(zero_records).is_err());

    assert!(SliderConfig::from_json_str("not json").is_err());
    assert!(SliderConfig::new(SliderGeometry::new(f64::NAN, 10.0))
        .validate()
        .is_err());
}
