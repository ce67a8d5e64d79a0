//! End-to-end tests for the analysis pipeline.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use solarwatch_core::analyze;
use solarwatch_core::config::AnalysisConfig;
use solarwatch_types::{
    DangerLabel, FlareSample, ForecastOutlook, ForecastSample, KpSample, ProtonSample,
    RadiationLevel, Snapshot, SourceAttribution, Trend, WindSample,
};

fn t(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap() + Duration::minutes(minutes)
}

fn kp(values: &[f64]) -> Vec<KpSample> {
    values
        .iter()
        .zip(0_i64..)
        .map(|(&kp, i)| KpSample { time: t(180 * i), kp })
        .collect()
}

fn wind(speeds: &[f64]) -> Vec<WindSample> {
    speeds
        .iter()
        .zip(0_i64..)
        .map(|(&speed, i)| WindSample {
            time: t(i),
            speed,
            density: 4.0,
        })
        .collect()
}

fn flares(fluxes: &[f64]) -> Vec<FlareSample> {
    fluxes
        .iter()
        .zip(0_i64..)
        .map(|(&flux, i)| FlareSample::new(t(i), flux))
        .collect()
}

fn protons(fluxes: &[f64]) -> Vec<ProtonSample> {
    fluxes
        .iter()
        .zip(0_i64..)
        .map(|(&flux, i)| ProtonSample { time: t(i), flux })
        .collect()
}

fn forecast(kps: &[f64]) -> Vec<ForecastSample> {
    kps.iter()
        .zip(0_i64..)
        .map(|(&kp, i)| ForecastSample {
            time: t(180 * i),
            kp,
        })
        .collect()
}

/// Kp 3,3,5; wind averaging 650 after 550; M6.2 average flux; 3 pfu.
fn storm_snapshot() -> Snapshot {
    let mut speeds = vec![550.0; 6];
    speeds.extend([650.0; 6]);
    Snapshot {
        kp: kp(&[3.0, 3.0, 5.0]),
        wind: wind(&speeds),
        flares: flares(&[6.2e-5; 12]),
        protons: protons(&[2.0, 3.0]),
        forecast: forecast(&[5.0, 6.0]),
        is_demo: false,
    }
}

#[test]
fn storm_scenario() {
    let assessment = analyze(&storm_snapshot(), None, &AnalysisConfig::default());

    assert_eq!(assessment.contributions.kp, 3);
    assert_eq!(assessment.contributions.wind, 2);
    assert_eq!(assessment.contributions.flare, 2);
    assert_eq!(assessment.danger.score, 7);
    assert_eq!(assessment.danger.label, DangerLabel::High);

    assert_eq!(assessment.metrics.flare_class.to_string(), "M6.2");
    assert!((assessment.metrics.wind_speed - 650.0).abs() < 1e-9);
    assert!((assessment.metrics.previous_wind_speed - 550.0).abs() < 1e-9);
    assert!((assessment.metrics.proton_flux - 3.0).abs() < 1e-9);

    assert_eq!(assessment.source, SourceAttribution::CoronalHoleStream);
    assert!(assessment.source_alert);
    assert_eq!(assessment.kp_trend, Trend::Rising);
    assert_eq!(assessment.wind_trend, Trend::Rising);
    assert_eq!(assessment.forecast, ForecastOutlook::Rising);
    assert_eq!(assessment.radiation, RadiationLevel::Background);
    assert_eq!(assessment.scales.geomagnetic, 1);
    assert_eq!(assessment.scales.radio_blackout, 2);
    assert!(assessment.flares.is_empty());
}

#[test]
fn empty_snapshot_is_quiet() {
    let assessment = analyze(&Snapshot::default(), None, &AnalysisConfig::default());

    assert_eq!(assessment.danger.score, 0);
    assert_eq!(assessment.danger.label, DangerLabel::Background);
    assert_eq!(assessment.metrics.flare_class.to_string(), "A0.0");
    assert!(assessment.flares.is_empty());
    assert!(assessment.significant_flares.is_empty());
    assert_eq!(assessment.kp_trend, Trend::Stable);
    assert_eq!(assessment.wind_trend, Trend::Stable);
    assert_eq!(assessment.source, SourceAttribution::Nominal);
    assert!(!assessment.source_alert);
    assert_eq!(assessment.forecast, ForecastOutlook::Steady);
    assert_eq!(assessment.radiation, RadiationLevel::Background);
}

#[test]
fn cold_start_wind_reports_stable() {
    let snapshot = Snapshot {
        wind: wind(&[600.0, 700.0, 800.0]),
        ..Snapshot::default()
    };
    let assessment = analyze(&snapshot, None, &AnalysisConfig::default());
    assert_eq!(assessment.wind_trend, Trend::Stable);
    assert!((assessment.metrics.wind_speed - 700.0).abs() < 1e-9);
}

#[test]
fn cme_with_proton_storm() {
    let snapshot = Snapshot {
        wind: wind(&[720.0; 6]),
        protons: protons(&[4.0, 35.0]),
        ..Snapshot::default()
    };
    let assessment = analyze(&snapshot, None, &AnalysisConfig::default());
    assert_eq!(assessment.source, SourceAttribution::CoronalMassEjection);
    assert_eq!(assessment.radiation, RadiationLevel::ProtonStorm);
    assert_eq!(assessment.scales.radiation, 1);
}

#[test]
fn only_latest_proton_sample_counts() {
    // A storm earlier in the window does not count once flux drops.
    let snapshot = Snapshot {
        wind: wind(&[600.0; 6]),
        protons: protons(&[80.0, 40.0, 2.0]),
        ..Snapshot::default()
    };
    let assessment = analyze(&snapshot, None, &AnalysisConfig::default());
    assert_eq!(assessment.source, SourceAttribution::CoronalHoleStream);
}

#[test]
fn peaks_reported_newest_first_with_significant_subset() {
    let snapshot = Snapshot {
        flares: flares(&[1e-7, 2e-6, 1e-7, 5e-7, 1e-7, 3e-5, 2e-7]),
        ..Snapshot::default()
    };
    let assessment = analyze(&snapshot, None, &AnalysisConfig::default());
    let all: Vec<_> = assessment.flares.iter().map(|f| f.sample().time).collect();
    let strong: Vec<_> = assessment
        .significant_flares
        .iter()
        .map(|f| f.sample().time)
        .collect();
    assert_eq!(all, vec![t(5), t(3), t(1)]);
    assert_eq!(strong, vec![t(5), t(1)]);
}

#[test]
fn previous_cycle_baseline() {
    let prior = Snapshot {
        kp: kp(&[2.0, 4.0]),
        wind: wind(&[400.0; 6]),
        ..Snapshot::default()
    };
    let current = Snapshot {
        kp: kp(&[4.0, 3.0]),
        wind: wind(&[480.0; 6]),
        ..Snapshot::default()
    };
    let assessment = analyze(&current, Some(&prior), &AnalysisConfig::default());
    assert_eq!(assessment.kp_trend, Trend::Falling);
    assert!((assessment.metrics.previous_kp - 4.0).abs() < 1e-9);
    assert_eq!(assessment.wind_trend, Trend::Rising);
}

#[test]
fn demo_flag_passes_through() {
    let snapshot = Snapshot {
        is_demo: true,
        ..storm_snapshot()
    };
    let assessment = analyze(&snapshot, None, &AnalysisConfig::default());
    assert!(assessment.is_demo);
    assert_eq!(assessment.danger.label, DangerLabel::High);
}

#[test]
fn analysis_is_idempotent() {
    let snapshot = storm_snapshot();
    let config = AnalysisConfig::default();
    let first = analyze(&snapshot, None, &config);
    let second = analyze(&snapshot, None, &config);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn x_class_average_drives_radiation_and_score() {
    let snapshot = Snapshot {
        flares: flares(&[2e-4; 12]),
        protons: protons(&[50.0]),
        ..Snapshot::default()
    };
    let assessment = analyze(&snapshot, None, &AnalysisConfig::default());
    assert_eq!(assessment.radiation, RadiationLevel::XRayFlare);
    assert_eq!(assessment.contributions.flare, 3);
    assert_eq!(assessment.danger.label, DangerLabel::Moderate);
}
