//! Phrase tables for the narrative sections.
//!
//! Variants within one table carry the same meaning; the selector only
//! changes the wording.

use solarwatch_types::{DangerLabel, SourceAttribution, Trend};

/// Status openers by danger tier.
pub const fn status_openers(label: DangerLabel) -> &'static [&'static str] {
    match label {
        DangerLabel::Background => &[
            "Space weather is quiet.",
            "Conditions around Earth are calm.",
            "The near-Earth environment is settled.",
        ],
        DangerLabel::Moderate => &[
            "Space weather is unsettled.",
            "Activity around Earth is elevated.",
            "Conditions in near-Earth space are noticeably disturbed.",
        ],
        DangerLabel::High => &[
            "A space-weather storm is in progress.",
            "Storm conditions are underway.",
            "The geomagnetic field is under significant stress.",
        ],
    }
}

/// Source attribution narratives.
pub const fn source_narratives(source: SourceAttribution) -> &'static [&'static str] {
    match source {
        SourceAttribution::CoronalMassEjection => &[
            "Fast wind arriving together with a proton event points to a coronal mass ejection.",
            "Fast plasma accompanied by energetic protons is the signature of a coronal mass ejection.",
        ],
        SourceAttribution::CoronalHoleStream => &[
            "Fast wind without a proton event is characteristic of a coronal-hole high-speed stream.",
            "The speed-up without energetic protons suggests a high-speed stream from a coronal hole.",
        ],
        SourceAttribution::Nominal => &[
            "The wind shows no sign of a disturbed solar source.",
            "Nothing in the wind points to an active solar driver.",
        ],
    }
}

/// Qualitative geomagnetic state for a Kp value.
pub fn geomagnetic_state(kp: f64) -> &'static str {
    if kp >= 5.0 {
        "storm level"
    } else if kp >= 4.0 {
        "active"
    } else if kp >= 3.0 {
        "unsettled"
    } else {
        "quiet"
    }
}

/// Clause describing the Kp trend.
pub const fn kp_trend_clause(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "and the index is climbing",
        Trend::Falling => "and the index is easing",
        Trend::Stable => "and holding steady",
    }
}

/// Qualitative wind speed level, on the wind scoring boundaries.
pub fn wind_level(speed: f64) -> &'static str {
    if speed >= 700.0 {
        "very fast"
    } else if speed >= 500.0 {
        "fast"
    } else if speed >= 400.0 {
        "moderately elevated"
    } else {
        "slow"
    }
}

/// Clause describing the wind-speed trend.
pub const fn wind_trend_clause(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "accelerating",
        Trend::Falling => "slowing",
        Trend::Stable => "steady",
    }
}
