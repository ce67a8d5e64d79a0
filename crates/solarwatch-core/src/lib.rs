//! Space-weather analysis engine for Solarwatch.
//!
//! Every component is a pure function over an immutable
//! [`Snapshot`](solarwatch_types::Snapshot); [`pipeline::analyze`] wires
//! them together once per polling cycle.
//!
//! # Modules
//!
//! - [`aggregate`] -- Trailing-window means and current/prior window pairs.
//! - [`flare`] -- X-ray flare peak detection and significance tagging.
//! - [`trend`] -- Rising/falling/stable classification with dead-bands.
//! - [`source`] -- Coronal-hole vs. CME attribution of fast wind.
//! - [`danger`] -- Additive threshold-table danger score and label.
//! - [`forecast`] -- Next-bucket Kp forecast comparison.
//! - [`radiation`] -- Radiation environment and NOAA G/S/R scales.
//! - [`tiers`] -- Ordered threshold tables shared by the scorers.
//! - [`config`] -- Configuration loading from `solarwatch-config.yaml`.
//! - [`pipeline`] -- The per-cycle analysis entry point.

pub mod aggregate;
pub mod config;
pub mod danger;
pub mod flare;
pub mod forecast;
pub mod pipeline;
pub mod radiation;
pub mod source;
pub mod tiers;
pub mod trend;

pub use config::{AnalysisConfig, ConfigError, TrendBaseline, WatchConfig};
pub use pipeline::analyze;
