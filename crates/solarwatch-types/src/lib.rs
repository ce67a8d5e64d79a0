//! Shared type definitions for the Solarwatch space-weather engine.
//!
//! This crate holds the data model exchanged with the telemetry
//! collaborator and the presentation layer. Types flow downstream to
//! `TypeScript` via `ts-rs` for the dashboard.
//!
//! # Modules
//!
//! - [`samples`] -- Telemetry sample records and the per-cycle [`Snapshot`]
//! - [`flare_class`] -- X-ray flare letter classification
//! - [`enums`] -- Classification labels (trend, source, outlook, radiation)
//! - [`assessment`] -- The analysis result exposed upward

pub mod assessment;
pub mod enums;
pub mod flare_class;
pub mod samples;

// Re-export all public types at crate root for convenience.
pub use assessment::{
    Assessment, DangerIndex, DetectedFlare, NoaaScales, ScoreContributions, SignalMetrics,
};
pub use enums::{DangerLabel, ForecastOutlook, RadiationLevel, SourceAttribution, Trend};
pub use flare_class::{FlareClass, FlareLetter, ParseFlareClassError};
pub use samples::{FlareSample, ForecastSample, KpSample, ProtonSample, Snapshot, WindSample};
