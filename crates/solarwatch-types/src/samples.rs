//! Telemetry sample records and the per-cycle snapshot.
//!
//! Every series is supplied by the data-fetch collaborator once per polling
//! cycle, ordered by non-decreasing time, and discarded at the next cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::flare_class::FlareClass;

/// A planetary geomagnetic index reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct KpSample {
    /// Observation time.
    pub time: DateTime<Utc>,
    /// Kp index, conceptually 0 (quiet) to 9 (extreme storm).
    pub kp: f64,
}

/// A solar-wind plasma reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WindSample {
    /// Observation time.
    pub time: DateTime<Utc>,
    /// Bulk speed in km/s.
    pub speed: f64,
    /// Proton density in particles/cm^3.
    pub density: f64,
}

/// A GOES long-wave X-ray flux reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FlareSample {
    /// Observation time.
    pub time: DateTime<Utc>,
    /// X-ray flux in W/m^2.
    pub flux: f64,
    /// Flare class label derived from `flux` (for example `C3.4`).
    #[serde(default)]
    pub class: String,
}

impl FlareSample {
    /// Create a sample, deriving `class` from `flux`.
    pub fn new(time: DateTime<Utc>, flux: f64) -> Self {
        Self {
            time,
            flux,
            class: FlareClass::from_flux(flux).to_string(),
        }
    }

    /// The class of this sample, re-derived from its flux.
    pub fn flare_class(&self) -> FlareClass {
        FlareClass::from_flux(self.flux)
    }
}

/// An integral proton flux reading (>=10 `MeV`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProtonSample {
    /// Observation time.
    pub time: DateTime<Utc>,
    /// Flux in pfu.
    pub flux: f64,
}

/// A forecast Kp bucket. Index 0 of a forecast series is the current or
/// nearest 3-hour bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ForecastSample {
    /// Bucket start time.
    pub time: DateTime<Utc>,
    /// Predicted Kp index.
    pub kp: f64,
}

/// One polling cycle's worth of telemetry.
///
/// `is_demo` is set by the collaborator when it fell back to synthetic
/// data; analysis runs identically either way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// Geomagnetic index series.
    #[serde(default)]
    pub kp: Vec<KpSample>,
    /// Solar-wind plasma series.
    #[serde(default)]
    pub wind: Vec<WindSample>,
    /// X-ray flux series.
    #[serde(default)]
    pub flares: Vec<FlareSample>,
    /// Proton flux series.
    #[serde(default)]
    pub protons: Vec<ProtonSample>,
    /// Kp forecast series.
    #[serde(default)]
    pub forecast: Vec<ForecastSample>,
    /// Whether the collaborator served synthetic fallback data.
    #[serde(default)]
    pub is_demo: bool,
}

impl Snapshot {
    /// Whether every series is ordered by non-decreasing time.
    pub fn is_time_ordered(&self) -> bool {
        ordered(&self.kp, |s| s.time)
            && ordered(&self.wind, |s| s.time)
            && ordered(&self.flares, |s| s.time)
            && ordered(&self.protons, |s| s.time)
            && ordered(&self.forecast, |s| s.time)
    }

    /// Stable-sort every series by time.
    pub fn sort_by_time(&mut self) {
        self.kp.sort_by_key(|s| s.time);
        self.wind.sort_by_key(|s| s.time);
        self.flares.sort_by_key(|s| s.time);
        self.protons.sort_by_key(|s| s.time);
        self.forecast.sort_by_key(|s| s.time);
    }

    /// Overwrite every flare sample's `class` with the label derived from
    /// its flux, so the label can never drift from the measurement.
    pub fn derive_flare_classes(&mut self) {
        for flare in &mut self.flares {
            flare.class = flare.flare_class().to_string();
        }
    }
}

fn ordered<T>(series: &[T], time: impl Fn(&T) -> DateTime<Utc>) -> bool {
    series.windows(2).all(|pair| match pair {
        [a, b] => time(a) <= time(b),
        _ => true,
    })
}
