//! Rising / falling / stable classification of a signal between windows.

use solarwatch_types::Trend;

/// Dead-band for the Kp trend: any change in Kp is a trend.
pub const KP_DEAD_BAND: f64 = 0.0;

/// Dead-band for the wind-speed trend in km/s.
pub const WIND_DEAD_BAND: f64 = 50.0;

/// Classify `current - previous` against a symmetric dead-band.
///
/// Deltas whose magnitude is at most `dead_band` are [`Trend::Stable`].
pub fn classify(current: f64, previous: f64, dead_band: f64) -> Trend {
    let delta = current - previous;
    if delta > dead_band {
        Trend::Rising
    } else if delta < -dead_band {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kp_any_change_is_a_trend() {
        assert_eq!(classify(5.0, 3.0, KP_DEAD_BAND), Trend::Rising);
        assert_eq!(classify(3.33, 3.67, KP_DEAD_BAND), Trend::Falling);
        assert_eq!(classify(4.0, 4.0, KP_DEAD_BAND), Trend::Stable);
    }

    #[test]
    fn wind_dead_band_is_inclusive() {
        assert_eq!(classify(550.0, 500.0, WIND_DEAD_BAND), Trend::Stable);
        assert_eq!(classify(450.0, 500.0, WIND_DEAD_BAND), Trend::Stable);
        assert_eq!(classify(550.5, 500.0, WIND_DEAD_BAND), Trend::Rising);
        assert_eq!(classify(449.5, 500.0, WIND_DEAD_BAND), Trend::Falling);
    }

    #[test]
    fn wind_within_band_for_any_baseline() {
        for base in [300.0, 420.0, 650.0, 900.0] {
            for offset in [-50.0, -25.0, 0.0, 25.0, 50.0] {
                assert_eq!(classify(base + offset, base, WIND_DEAD_BAND), Trend::Stable);
            }
            assert_eq!(classify(base + 51.0, base, WIND_DEAD_BAND), Trend::Rising);
            assert_eq!(classify(base - 51.0, base, WIND_DEAD_BAND), Trend::Falling);
        }
    }

    #[test]
    fn nan_is_stable() {
        assert_eq!(classify(f64::NAN, 3.0, KP_DEAD_BAND), Trend::Stable);
    }
}
