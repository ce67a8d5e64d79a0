//! Comparison of the next forecast Kp bucket with current conditions.

use solarwatch_types::{ForecastOutlook, ForecastSample};

/// Kp forecast for the next 3-hour bucket.
///
/// Index 0 of the forecast is the current bucket, so the next bucket is
/// index 1. With one entry or fewer there is no next bucket and the
/// current Kp is returned.
pub fn next_kp(forecast: &[ForecastSample], last_kp: f64) -> f64 {
    forecast.get(1).map_or(last_kp, |bucket| bucket.kp)
}

/// Compare the next bucket against the latest Kp.
///
/// A lower forecast only reads as a decline when current activity is at
/// least `decline_min_kp`; a lower forecast from quiet conditions is
/// "no significant change".
pub fn compare(next_kp: f64, last_kp: f64, decline_min_kp: f64) -> ForecastOutlook {
    if next_kp > last_kp {
        ForecastOutlook::Rising
    } else if next_kp < last_kp && last_kp >= decline_min_kp {
        ForecastOutlook::Declining
    } else {
        ForecastOutlook::Steady
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn forecast(kps: &[f64]) -> Vec<ForecastSample> {
        let start = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        kps.iter()
            .zip(0_i64..)
            .map(|(&kp, i)| ForecastSample {
                time: start + Duration::hours(3 * i),
                kp,
            })
            .collect()
    }

    #[test]
    fn uses_second_bucket() {
        assert!((next_kp(&forecast(&[2.0, 6.0, 1.0]), 3.0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_forecast_falls_back_to_current() {
        assert!((next_kp(&forecast(&[]), 3.0) - 3.0).abs() < f64::EPSILON);
        assert!((next_kp(&forecast(&[8.0]), 3.0) - 3.0).abs() < f64::EPSILON);
        assert_eq!(compare(next_kp(&forecast(&[8.0]), 3.0), 3.0, 4.0), ForecastOutlook::Steady);
    }

    #[test]
    fn rising() {
        assert_eq!(compare(5.0, 3.0, 4.0), ForecastOutlook::Rising);
    }

    #[test]
    fn declining_requires_elevated_activity() {
        assert_eq!(compare(3.0, 5.0, 4.0), ForecastOutlook::Declining);
        assert_eq!(compare(3.0, 4.0, 4.0), ForecastOutlook::Declining);
        assert_eq!(compare(2.0, 3.67, 4.0), ForecastOutlook::Steady);
    }

    #[test]
    fn equal_is_steady() {
        assert_eq!(compare(5.0, 5.0, 4.0), ForecastOutlook::Steady);
    }
}
