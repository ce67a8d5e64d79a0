//! Trailing-window means over telemetry series.
//!
//! A window is always the last `count` samples of a slice. Short series
//! average whatever is available and empty series average to zero, so
//! these functions never fail.

use solarwatch_types::Trend;

use crate::trend;

/// The last `count` samples of `series` (all of it when shorter).
pub fn trailing<T>(series: &[T], count: usize) -> &[T] {
    let start = series.len().saturating_sub(count);
    series.get(start..).unwrap_or_default()
}

/// The samples before the trailing `count`-sample window.
pub fn preceding<T>(series: &[T], count: usize) -> &[T] {
    let end = series.len().saturating_sub(count);
    series.get(..end).unwrap_or_default()
}

/// Arithmetic mean of `key` over the last `count` samples; zero when empty.
pub fn average<T>(series: &[T], count: usize, key: impl Fn(&T) -> f64) -> f64 {
    let window = trailing(series, count);
    if window.is_empty() {
        return 0.0;
    }
    let sum: f64 = window.iter().map(key).sum();
    #[allow(clippy::cast_precision_loss)]
    let len = window.len() as f64;
    sum / len
}

/// Current and prior window averages of one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPair {
    /// Mean over the current window.
    pub current: f64,
    /// Mean over the prior window.
    pub previous: f64,
}

impl WindowPair {
    /// Average the current window of `series` and the prior window.
    ///
    /// The prior window is the trailing window of `prior` when given,
    /// otherwise the `count` samples preceding the current window. An
    /// empty prior falls back to the current average so a cold start
    /// reports no change.
    pub fn from_series<T>(
        series: &[T],
        prior: Option<&[T]>,
        count: usize,
        key: impl Fn(&T) -> f64,
    ) -> Self {
        let current = average(series, count, &key);
        let prior = prior.unwrap_or_else(|| preceding(series, count));
        let previous = if prior.is_empty() {
            current
        } else {
            average(prior, count, &key)
        };
        Self { current, previous }
    }

    /// Classify the move from `previous` to `current` against `dead_band`.
    pub fn trend(&self, dead_band: f64) -> Trend {
        trend::classify(self.current, self.previous, dead_band)
    }
}
