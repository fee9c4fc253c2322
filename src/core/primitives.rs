use chrono::{DateTime, Utc};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Converts an instant into the scalar time axis used by mapping points.
///
/// Whole seconds and the sub-second part are added separately so no part of
/// the instant is truncated before the conversion to `f64`.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / NANOS_PER_SECOND
}

/// Converts a scalar time back into an instant.
///
/// Rounds to the microsecond, the finest step an `f64` holds for present-day
/// unix times. Returns `None` for non-finite values or values outside
/// chrono's range.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let micros = (seconds * MICROS_PER_SECOND).round();
    if micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros as i64)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{datetime_to_unix_seconds, unix_seconds_to_datetime};

    #[test]
    fn seconds_round_trip_keeps_sub_millisecond_parts() {
        let time =
            Utc.timestamp_millis_opt(1_431_302_400_250).unwrap() + Duration::microseconds(500);
        let seconds = datetime_to_unix_seconds(time);
        assert!((seconds - 1_431_302_400.2505).abs() < 1e-6);
        assert_eq!(unix_seconds_to_datetime(seconds), Some(time));
    }

    #[test]
    fn whole_seconds_are_exact() {
        let time = Utc.with_ymd_and_hms(2015, 5, 11, 0, 0, 0).unwrap();
        assert_eq!(datetime_to_unix_seconds(time), 1_431_302_400.0);
    }

    #[test]
    fn zero_seconds_is_the_epoch() {
        let epoch = unix_seconds_to_datetime(0.0).unwrap();
        assert_eq!(epoch.timestamp(), 0);
    }

    #[test]
    fn pre_epoch_instants_convert_back() {
        let time =
            Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 58).unwrap() + Duration::microseconds(250);
        assert_eq!(
            unix_seconds_to_datetime(datetime_to_unix_seconds(time)),
            Some(time)
        );
    }

    #[test]
    fn non_finite_seconds_have_no_instant() {
        assert_eq!(unix_seconds_to_datetime(f64::NAN), None);
        assert_eq!(unix_seconds_to_datetime(f64::INFINITY), None);
    }
}
