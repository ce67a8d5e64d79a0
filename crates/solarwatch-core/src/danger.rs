//! Composite danger scoring.
//!
//! Three independent contributions are looked up in their threshold tables
//! and summed; the total is bucketed into a label by two hard cutoffs.
//! There is no interaction between signals, so the score is monotonic in
//! each input with the others held fixed.

use solarwatch_types::{DangerIndex, DangerLabel, FlareClass, ScoreContributions};

use crate::config::ScoringConfig;

/// The scorer's inputs, already aggregated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DangerInputs {
    /// Latest Kp reading.
    pub last_kp: f64,
    /// Trailing average wind speed in km/s.
    pub avg_wind_speed: f64,
    /// Class of the trailing average X-ray flux.
    pub flare_class: FlareClass,
}

/// Look up each signal's points.
pub fn contributions(inputs: &DangerInputs, scoring: &ScoringConfig) -> ScoreContributions {
    ScoreContributions {
        kp: scoring.kp.points(&inputs.last_kp),
        wind: scoring.wind.points(&inputs.avg_wind_speed),
        flare: scoring.flare.points(&inputs.flare_class),
    }
}

/// Bucket a score. Cutoffs are inclusive lower bounds.
pub const fn label_for(score: u8, scoring: &ScoringConfig) -> DangerLabel {
    if score >= scoring.high_at {
        DangerLabel::High
    } else if score >= scoring.moderate_at {
        DangerLabel::Moderate
    } else {
        DangerLabel::Background
    }
}

/// Score the inputs, returning the index and its breakdown.
pub fn score(inputs: &DangerInputs, scoring: &ScoringConfig) -> (DangerIndex, ScoreContributions) {
    let parts = contributions(inputs, scoring);
    let score = parts.total();
    let index = DangerIndex {
        score,
        label: label_for(score, scoring),
    };
    (index, parts)
}
