//! Narrative synthesis from an [`Assessment`].
//!
//! The synthesizer never recomputes a classification. It maps each
//! assessment field to wording, draws phrase variants through the injected
//! [`PhraseSelector`], and renders the four section templates.

use serde::Serialize;
use solarwatch_core::config::{AnalysisConfig, WatchConfig};
use solarwatch_types::{Assessment, ForecastOutlook, RadiationLevel};
use tracing::debug;

use crate::error::ReportError;
use crate::phrases;
use crate::report::SituationReport;
use crate::selector::{PhraseSelector, pick};
use crate::templates::{Section, SectionTemplates};

/// Composes [`SituationReport`]s.
pub struct Synthesizer {
    templates: SectionTemplates,
    shielded_kp_ceiling: f64,
    proton_storm_flux: f64,
    max_score: u8,
}

#[derive(Serialize)]
struct StatusContext<'a> {
    opener: &'a str,
    kp: String,
    state: &'a str,
    trend: &'a str,
    score: u8,
    max_score: u8,
    label: &'a str,
}

#[derive(Serialize)]
struct DynamicsContext<'a> {
    level: &'a str,
    speed: String,
    wind_trend: &'a str,
    density: String,
    source: &'a str,
    shielded: bool,
}

#[derive(Serialize)]
struct ForecastContext {
    outlook: &'static str,
    kp: String,
    next_kp: String,
}

#[derive(Serialize)]
struct PhysicsContext {
    radiation: &'static str,
    flare_class: String,
    proton: String,
    proton_threshold: String,
    r_scale: Option<String>,
    s_scale: Option<String>,
    significant_peaks: usize,
    latest_peak: Option<String>,
}

impl Synthesizer {
    /// Build a synthesizer from compiled templates and the analysis
    /// settings the narrative quotes.
    pub fn new(templates: SectionTemplates, analysis: &AnalysisConfig) -> Self {
        Self {
            templates,
            shielded_kp_ceiling: analysis.thresholds.shielded_kp_ceiling,
            proton_storm_flux: analysis.thresholds.proton_storm_flux,
            max_score: analysis.scoring.max_score(),
        }
    }

    /// Build from configuration: template overrides from
    /// `report.templates_dir` when set, embedded templates otherwise.
    pub fn from_config(config: &WatchConfig) -> Result<Self, ReportError> {
        let templates = match &config.report.templates_dir {
            Some(dir) => SectionTemplates::from_dir(dir)?,
            None => SectionTemplates::embedded()?,
        };
        Ok(Self::new(templates, &config.analysis))
    }

    /// Compose the four sections for `assessment`.
    pub fn compose(
        &self,
        assessment: &Assessment,
        selector: &mut dyn PhraseSelector,
    ) -> Result<SituationReport, ReportError> {
        let report = SituationReport {
            status: self.status(assessment, selector)?,
            dynamics: self.dynamics(assessment, selector)?,
            forecast: self.forecast(assessment)?,
            physics: self.physics(assessment)?,
        };
        debug!(
            label = ?assessment.danger.label,
            source = ?assessment.source,
            chars = report.text().len(),
            "Situation report composed"
        );
        Ok(report)
    }

    fn status(
        &self,
        assessment: &Assessment,
        selector: &mut dyn PhraseSelector,
    ) -> Result<String, ReportError> {
        let kp = assessment.metrics.last_kp;
        let state = match assessment.scales.geomagnetic_label() {
            Some(g) => format!("{} ({g})", phrases::geomagnetic_state(kp)),
            None => phrases::geomagnetic_state(kp).to_owned(),
        };
        let context = StatusContext {
            opener: pick(selector, phrases::status_openers(assessment.danger.label)),
            kp: format!("{kp:.1}"),
            state: &state,
            trend: phrases::kp_trend_clause(assessment.kp_trend),
            score: assessment.danger.score,
            max_score: self.max_score,
            label: danger_label_text(assessment),
        };
        self.templates.render(Section::Status, &context)
    }

    fn dynamics(
        &self,
        assessment: &Assessment,
        selector: &mut dyn PhraseSelector,
    ) -> Result<String, ReportError> {
        let metrics = &assessment.metrics;
        // A non-nominal attribution implies the wind is above the high-wind threshold.
        let high_wind = assessment.source.is_alert();
        let context = DynamicsContext {
            level: phrases::wind_level(metrics.wind_speed),
            speed: format!("{:.0}", metrics.wind_speed),
            wind_trend: phrases::wind_trend_clause(assessment.wind_trend),
            density: format!("{:.1}", metrics.wind_density),
            source: pick(selector, phrases::source_narratives(assessment.source)),
            shielded: high_wind && metrics.last_kp < self.shielded_kp_ceiling,
        };
        self.templates.render(Section::Dynamics, &context)
    }

    fn forecast(&self, assessment: &Assessment) -> Result<String, ReportError> {
        let context = ForecastContext {
            outlook: match assessment.forecast {
                ForecastOutlook::Rising => "rising",
                ForecastOutlook::Declining => "declining",
                ForecastOutlook::Steady => "steady",
            },
            kp: format!("{:.1}", assessment.metrics.last_kp),
            next_kp: format!("{:.1}", assessment.metrics.next_kp),
        };
        self.templates.render(Section::Forecast, &context)
    }

    fn physics(&self, assessment: &Assessment) -> Result<String, ReportError> {
        let metrics = &assessment.metrics;
        let context = PhysicsContext {
            radiation: match assessment.radiation {
                RadiationLevel::XRayFlare => "x_ray_flare",
                RadiationLevel::ProtonStorm => "proton_storm",
                RadiationLevel::Background => "background",
            },
            flare_class: metrics.flare_class.to_string(),
            proton: format!("{:.1}", metrics.proton_flux),
            proton_threshold: format!("{}", self.proton_storm_flux),
            r_scale: assessment.scales.radio_blackout_label(),
            s_scale: assessment.scales.radiation_label(),
            significant_peaks: assessment.significant_flares.len(),
            latest_peak: assessment
                .significant_flares
                .first()
                .map(|peak| peak.sample().class.clone()),
        };
        self.templates.render(Section::Physics, &context)
    }
}

const fn danger_label_text(assessment: &Assessment) -> &'static str {
    match assessment.danger.label {
        solarwatch_types::DangerLabel::Background => "background",
        solarwatch_types::DangerLabel::Moderate => "moderate",
        solarwatch_types::DangerLabel::High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        assert!(Synthesizer::from_config(&WatchConfig::default()).is_ok());
    }

    #[test]
    fn keeps_quoted_thresholds() {
        let templates = SectionTemplates::embedded();
        assert!(templates.is_ok());
        if let Ok(templates) = templates {
            let synth = Synthesizer::new(templates, &AnalysisConfig::default());
            assert!((synth.proton_storm_flux - 10.0).abs() < f64::EPSILON);
            assert!((synth.shielded_kp_ceiling - 4.0).abs() < f64::EPSILON);
            assert_eq!(synth.max_score, 10);
        }
    }
}
