//! Classification labels produced by the analysis engine.
//!
//! Each label is exposed upward as a separately addressable field so the
//! presentation layer can render badges without re-deriving anything.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of change between the current and prior window of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Trend {
    /// Delta above the dead-band.
    Rising,
    /// Delta below the negative dead-band.
    Falling,
    /// Delta within the dead-band.
    Stable,
}

/// Attributed driver of the current solar-wind conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SourceAttribution {
    /// Fast wind together with a proton event: coronal mass ejection.
    CoronalMassEjection,
    /// Fast wind without a proton event: coronal-hole high-speed stream.
    CoronalHoleStream,
    /// Nominal solar wind, no attribution.
    Nominal,
}

impl SourceAttribution {
    /// Whether this attribution should raise the dashboard alert.
    pub const fn is_alert(self) -> bool {
        !matches!(self, Self::Nominal)
    }
}

/// Expected change of geomagnetic activity over the next forecast bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ForecastOutlook {
    /// Next bucket forecasts higher Kp than now.
    Rising,
    /// Next bucket forecasts lower Kp and current activity is elevated.
    Declining,
    /// No significant change expected.
    Steady,
}

/// Dominant radiation environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RadiationLevel {
    /// X-class X-ray flaring, sunlit-side radio blackouts.
    XRayFlare,
    /// Proton flux at or above the radiation-storm threshold.
    ProtonStorm,
    /// Background radiation.
    Background,
}

/// Severity bucket of the composite danger score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum DangerLabel {
    /// Quiet conditions (green).
    Background,
    /// Noticeable activity (yellow).
    Moderate,
    /// Storm-level activity (red).
    High,
}

impl DangerLabel {
    /// Dashboard color for the label.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Background => "green",
            Self::Moderate => "yellow",
            Self::High => "red",
        }
    }
}
