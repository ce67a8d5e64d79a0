//! The composed situation report.

use std::fmt;

use serde::Serialize;

use crate::templates::Section;

/// Four narrative sections, kept separately addressable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SituationReport {
    /// Geomagnetic state and trend.
    pub status: String,
    /// Solar-wind level and source attribution.
    pub dynamics: String,
    /// Forecast comparison.
    pub forecast: String,
    /// Radiation and X-ray environment.
    pub physics: String,
}

impl SituationReport {
    /// Text of one section.
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Status => &self.status,
            Section::Dynamics => &self.dynamics,
            Section::Forecast => &self.forecast,
            Section::Physics => &self.physics,
        }
    }

    /// All sections joined by a blank line, in report order.
    pub fn text(&self) -> String {
        Section::ORDER
            .iter()
            .map(|&section| self.section(section))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for SituationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
