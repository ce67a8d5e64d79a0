//! The per-cycle analysis pipeline.
//!
//! [`analyze`] runs every component over one immutable [`Snapshot`] and
//! collects the results into an [`Assessment`]. It holds no state between
//! calls; the caller decides whether trend deltas are taken against the
//! preceding samples of the same snapshot or against a retained snapshot
//! from the previous cycle.

use solarwatch_types::{Assessment, FlareClass, SignalMetrics, Snapshot};
use tracing::debug;

use crate::aggregate::{WindowPair, average};
use crate::config::AnalysisConfig;
use crate::danger::{self, DangerInputs};
use crate::flare::{self, PeakThresholds};
use crate::{forecast, radiation, source};

/// Analyze one snapshot.
///
/// `prior` supplies the previous cycle's snapshot for trend deltas; with
/// `None` the prior window is the samples preceding the current window.
/// Total over any snapshot: empty series degrade to zero averages, no
/// peaks and background classes.
pub fn analyze(
    current: &Snapshot,
    prior: Option<&Snapshot>,
    config: &AnalysisConfig,
) -> Assessment {
    let windows = &config.windows;
    let thresholds = &config.thresholds;

    let last_kp = current.kp.last().map_or(0.0, |s| s.kp);
    let kp = WindowPair::from_series(
        &current.kp,
        prior.map(|p| p.kp.as_slice()),
        windows.kp_trend,
        |s| s.kp,
    );
    let wind = WindowPair::from_series(
        &current.wind,
        prior.map(|p| p.wind.as_slice()),
        windows.wind,
        |s| s.speed,
    );
    let wind_density = average(&current.wind, windows.wind, |s| s.density);
    let flare_flux = average(&current.flares, windows.flare, |s| s.flux);
    let flare_class = FlareClass::from_flux(flare_flux);
    let proton_flux = current.protons.last().map_or(0.0, |s| s.flux);
    let next_kp = forecast::next_kp(&current.forecast, last_kp);

    let flares = flare::detect_peaks(
        &current.flares,
        PeakThresholds {
            noise_floor: thresholds.flare_noise_floor,
            significance: thresholds.flare_significance,
        },
    );
    let significant_flares = flare::significant(&flares);

    let source = source::attribute(
        source::is_high_wind(wind.current, thresholds.high_wind_speed),
        source::is_proton_storm(proton_flux, thresholds.proton_storm_flux),
    );

    let (danger, contributions) = danger::score(
        &DangerInputs {
            last_kp,
            avg_wind_speed: wind.current,
            flare_class,
        },
        &config.scoring,
    );

    let assessment = Assessment {
        danger,
        contributions,
        flares,
        significant_flares,
        kp_trend: kp.trend(thresholds.kp_trend_dead_band),
        wind_trend: wind.trend(thresholds.wind_trend_dead_band),
        source,
        source_alert: source.is_alert(),
        forecast: forecast::compare(next_kp, last_kp, thresholds.forecast_decline_kp),
        radiation: radiation::classify(flare_class, proton_flux, thresholds.proton_storm_flux),
        scales: radiation::noaa_scales(last_kp, proton_flux, flare_class),
        metrics: SignalMetrics {
            last_kp,
            previous_kp: kp.previous,
            wind_speed: wind.current,
            previous_wind_speed: wind.previous,
            wind_density,
            flare_flux,
            flare_class,
            proton_flux,
            next_kp,
        },
        is_demo: current.is_demo,
    };

    debug!(
        score = assessment.danger.score,
        label = ?assessment.danger.label,
        kp_points = contributions.kp,
        wind_points = contributions.wind,
        flare_points = contributions.flare,
        flare_class = %flare_class,
        peaks = assessment.flares.len(),
        significant = assessment.significant_flares.len(),
        source = ?assessment.source,
        is_demo = assessment.is_demo,
        "Snapshot analyzed"
    );

    assessment
}
