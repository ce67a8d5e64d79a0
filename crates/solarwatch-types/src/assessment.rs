//! The per-cycle analysis result handed to the presentation layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{DangerLabel, ForecastOutlook, RadiationLevel, SourceAttribution, Trend};
use crate::flare_class::FlareClass;
use crate::samples::FlareSample;

/// Composite danger score with its severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DangerIndex {
    /// Sum of the per-signal contributions (0 to 10 with default tables).
    pub score: u8,
    /// Severity bucket for `score`.
    pub label: DangerLabel,
}

/// Per-signal points that make up a [`DangerIndex`] score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScoreContributions {
    /// Points from the latest Kp.
    pub kp: u8,
    /// Points from the trailing wind-speed average.
    pub wind: u8,
    /// Points from the trailing average flare class.
    pub flare: u8,
}

impl ScoreContributions {
    /// Sum of all contributions.
    pub const fn total(&self) -> u8 {
        self.kp.saturating_add(self.wind).saturating_add(self.flare)
    }
}

/// A local maximum found in the X-ray flux series.
///
/// Significance is derived from the sample when the peak is built and
/// cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DetectedFlare {
    #[serde(flatten)]
    sample: FlareSample,
    is_significant: bool,
}

impl DetectedFlare {
    /// Wrap a peak sample, tagging it significant when its flux is at or
    /// above `significance_flux`.
    pub fn new(sample: FlareSample, significance_flux: f64) -> Self {
        let is_significant = sample.flux >= significance_flux;
        Self {
            sample,
            is_significant,
        }
    }

    /// The underlying peak sample.
    pub const fn sample(&self) -> &FlareSample {
        &self.sample
    }

    /// Whether the peak reached the significance threshold.
    pub const fn is_significant(&self) -> bool {
        self.is_significant
    }
}

/// NOAA space-weather scale levels; 0 means below scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NoaaScales {
    /// Geomagnetic storm level (G1-G5).
    pub geomagnetic: u8,
    /// Solar radiation storm level (S1-S5).
    pub radiation: u8,
    /// Radio blackout level (R1-R5).
    pub radio_blackout: u8,
}

impl NoaaScales {
    /// Badge text such as `G3`, or `None` below scale.
    pub fn geomagnetic_label(&self) -> Option<String> {
        scale_label('G', self.geomagnetic)
    }

    /// Badge text such as `S1`, or `None` below scale.
    pub fn radiation_label(&self) -> Option<String> {
        scale_label('S', self.radiation)
    }

    /// Badge text such as `R2`, or `None` below scale.
    pub fn radio_blackout_label(&self) -> Option<String> {
        scale_label('R', self.radio_blackout)
    }
}

fn scale_label(prefix: char, level: u8) -> Option<String> {
    (level > 0).then(|| format!("{prefix}{level}"))
}

/// Raw aggregates the classifications were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SignalMetrics {
    /// Latest Kp sample (0 when the series is empty).
    pub last_kp: f64,
    /// Kp of the prior trend window.
    pub previous_kp: f64,
    /// Trailing average wind speed in km/s.
    pub wind_speed: f64,
    /// Trailing average wind speed of the prior window.
    pub previous_wind_speed: f64,
    /// Trailing average wind density in particles/cm^3.
    pub wind_density: f64,
    /// Trailing average X-ray flux in W/m^2.
    pub flare_flux: f64,
    /// Class of `flare_flux`.
    #[ts(as = "String")]
    pub flare_class: FlareClass,
    /// Latest proton flux in pfu (0 when the series is empty).
    pub proton_flux: f64,
    /// Kp forecast for the next bucket, or `last_kp` when unavailable.
    pub next_kp: f64,
}

/// Everything the engine derives from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Assessment {
    /// Composite danger index.
    pub danger: DangerIndex,
    /// Points each signal contributed to the score.
    pub contributions: ScoreContributions,
    /// All detected flare peaks, most recent first.
    pub flares: Vec<DetectedFlare>,
    /// Significant peaks only, most recent first.
    pub significant_flares: Vec<DetectedFlare>,
    /// Trend of the geomagnetic index.
    pub kp_trend: Trend,
    /// Trend of the solar-wind speed.
    pub wind_trend: Trend,
    /// Attributed driver of the solar wind.
    pub source: SourceAttribution,
    /// Whether `source` warrants a dashboard alert.
    pub source_alert: bool,
    /// Forecast comparison result.
    pub forecast: ForecastOutlook,
    /// Dominant radiation environment.
    pub radiation: RadiationLevel,
    /// NOAA scale levels for badges.
    pub scales: NoaaScales,
    /// Aggregates behind the classifications.
    pub metrics: SignalMetrics,
    /// Whether the snapshot was synthetic fallback data.
    pub is_demo: bool,
}
