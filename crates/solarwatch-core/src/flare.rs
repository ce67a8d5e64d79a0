//! X-ray flare peak detection.
//!
//! A sample is a peak when it is strictly greater than both neighbours and
//! strictly above the noise floor. Only interior samples are candidates:
//! the first and last samples of a series are never reported, even when
//! they are the largest values in it.

use solarwatch_types::{DetectedFlare, FlareSample};

/// Flux thresholds used by [`detect_peaks`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakThresholds {
    /// Flux a peak must exceed (exclusive).
    pub noise_floor: f64,
    /// Flux at or above which a peak is significant (inclusive).
    pub significance: f64,
}

impl Default for PeakThresholds {
    fn default() -> Self {
        Self {
            noise_floor: 1e-8,
            significance: 1e-6,
        }
    }
}

/// Scan a time-ordered flux series for local maxima.
///
/// Single pass, no smoothing. Returns peaks most recent first; series
/// shorter than three samples have no interior and yield nothing.
pub fn detect_peaks(series: &[FlareSample], thresholds: PeakThresholds) -> Vec<DetectedFlare> {
    let mut peaks: Vec<DetectedFlare> = series
        .windows(3)
        .filter_map(|window| match window {
            [before, sample, after]
                if sample.flux > before.flux
                    && sample.flux > after.flux
                    && sample.flux > thresholds.noise_floor =>
            {
                Some(DetectedFlare::new(sample.clone(), thresholds.significance))
            }
            _ => None,
        })
        .collect();
    peaks.reverse();
    peaks
}

/// The significant subset of `peaks`, order preserved.
pub fn significant(peaks: &[DetectedFlare]) -> Vec<DetectedFlare> {
    peaks
        .iter()
        .filter(|peak| peak.is_significant())
        .cloned()
        .collect()
}
