//! Synthetic telemetry served when the collaborator has no live data.
//!
//! Values follow plausible ranges (Kp in thirds between 0 and 9, wind
//! 300-800 km/s, B/C-class X-ray background with occasional spikes) so the
//! dashboard and report exercise every code path. Every snapshot is
//! flagged `is_demo`.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solarwatch_types::{
    FlareSample, ForecastSample, KpSample, ProtonSample, Snapshot, WindSample,
};

use crate::source::SnapshotSource;

/// Number of 3-hour Kp buckets in a demo snapshot.
const KP_BUCKETS: i64 = 8;

/// Number of one-minute plasma, X-ray and proton samples.
const MINUTE_SAMPLES: i64 = 120;

/// Number of forecast buckets, starting with the current one.
const FORECAST_BUCKETS: i64 = 8;

/// Generates synthetic snapshots.
pub struct DemoSnapshotSource {
    rng: StdRng,
    anchor: Option<DateTime<Utc>>,
}

impl DemoSnapshotSource {
    /// A generator seeded with `seed`, or from OS entropy when unset.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng, anchor: None }
    }

    /// Pin the snapshot end time instead of using the wall clock.
    #[cfg(test)]
    pub fn anchored(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    fn generate(&mut self, now: DateTime<Utc>) -> Snapshot {
        let rng = &mut self.rng;

        let base_kp: f64 = rng.random_range(1.0..6.0);
        let kp: Vec<KpSample> = (0..KP_BUCKETS)
            .map(|i| KpSample {
                time: now - Duration::hours(3 * (KP_BUCKETS - 1 - i)),
                kp: thirds((base_kp + rng.random_range(-1.0..1.0)).clamp(0.0, 9.0)),
            })
            .collect();
        let last_kp = kp.last().map_or(base_kp, |s| s.kp);

        let mut speed: f64 = rng.random_range(350.0..650.0);
        let wind = minutes(now)
            .map(|time| {
                speed = (speed + rng.random_range(-15.0..15.0)).clamp(300.0, 800.0);
                WindSample {
                    time,
                    speed,
                    density: rng.random_range(2.0..10.0),
                }
            })
            .collect();

        let background: f64 = rng.random_range(-7.5..-6.0);
        let flares = minutes(now)
            .map(|time| {
                let mut flux = 10f64.powf(background + rng.random_range(-0.2..0.2));
                if rng.random_bool(0.05) {
                    flux *= rng.random_range(3.0..40.0);
                }
                FlareSample::new(time, flux)
            })
            .collect();

        let storm = rng.random_bool(0.1);
        let protons = minutes(now)
            .map(|time| ProtonSample {
                time,
                flux: if storm {
                    rng.random_range(10.0..200.0)
                } else {
                    10f64.powf(rng.random_range(-0.5..0.8))
                },
            })
            .collect();

        let forecast = (0..FORECAST_BUCKETS)
            .map(|i| ForecastSample {
                time: now + Duration::hours(3 * i),
                kp: thirds((last_kp + rng.random_range(-1.5..1.5)).clamp(0.0, 9.0)),
            })
            .collect();

        Snapshot {
            kp,
            wind,
            flares,
            protons,
            forecast,
            is_demo: true,
        }
    }
}

impl SnapshotSource for DemoSnapshotSource {
    fn fetch(&mut self) -> Snapshot {
        let now = self.anchor.unwrap_or_else(Utc::now);
        self.generate(now)
    }
}

/// One-minute timestamps ending at `now`, oldest first.
fn minutes(now: DateTime<Utc>) -> impl Iterator<Item = DateTime<Utc>> {
    (0..MINUTE_SAMPLES).map(move |i| now - Duration::minutes(MINUTE_SAMPLES - 1 - i))
}

/// Kp is reported in thirds (5-, 5o, 5+).
fn thirds(kp: f64) -> f64 {
    (kp * 3.0).round() / 3.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn demo_snapshots_are_flagged_and_ordered() {
        let snapshot = DemoSnapshotSource::new(Some(3)).anchored(anchor()).fetch();
        assert!(snapshot.is_demo);
        assert!(snapshot.is_time_ordered());
        assert_eq!(snapshot.kp.len(), 8);
        assert_eq!(snapshot.wind.len(), 120);
        assert_eq!(snapshot.forecast.len(), 8);
        assert_eq!(snapshot.kp.last().unwrap().time, anchor());
    }

    #[test]
    fn values_stay_in_range() {
        let mut source = DemoSnapshotSource::new(Some(11)).anchored(anchor());
        for _ in 0..20 {
            let snapshot = source.fetch();
            assert!(snapshot.kp.iter().all(|s| (0.0..=9.0).contains(&s.kp)));
            assert!(snapshot.wind.iter().all(|s| (300.0..=800.0).contains(&s.speed)));
            assert!(snapshot.flares.iter().all(|s| s.flux > 0.0));
        }
    }

    #[test]
    fn same_seed_same_snapshot() {
        let a = DemoSnapshotSource::new(Some(99)).anchored(anchor()).fetch();
        let b = DemoSnapshotSource::new(Some(99)).anchored(anchor()).fetch();
        assert_eq!(a, b);
    }
}
