//! Section template loading and rendering via `minijinja`.
//!
//! The four section templates ship embedded in the binary. Operators can
//! override any of them by placing `status.j2`, `dynamics.j2`,
//! `forecast.j2` or `physics.j2` in a directory; missing files keep the
//! embedded version.

use std::path::Path;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::ReportError;

/// The four report sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Geomagnetic state and trend.
    Status,
    /// Solar-wind level and source attribution.
    Dynamics,
    /// Forecast comparison.
    Forecast,
    /// Radiation and X-ray environment.
    Physics,
}

impl Section {
    /// All sections in report order.
    pub const ORDER: [Self; 4] = [Self::Status, Self::Dynamics, Self::Forecast, Self::Physics];

    /// Template name of the section.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Dynamics => "dynamics",
            Self::Forecast => "forecast",
            Self::Physics => "physics",
        }
    }

    const fn embedded_source(self) -> &'static str {
        match self {
            Self::Status => include_str!("../templates/status.j2"),
            Self::Dynamics => include_str!("../templates/dynamics.j2"),
            Self::Forecast => include_str!("../templates/forecast.j2"),
            Self::Physics => include_str!("../templates/physics.j2"),
        }
    }
}

/// Compiled section templates.
pub struct SectionTemplates {
    env: Environment<'static>,
}

impl SectionTemplates {
    /// The built-in templates.
    pub fn embedded() -> Result<Self, ReportError> {
        let mut env = new_environment();
        for section in Section::ORDER {
            env.add_template(section.name(), section.embedded_source())
                .map_err(|e| template_error(section, &e))?;
        }
        Ok(Self { env })
    }

    /// Built-in templates overridden by any `<section>.j2` found in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ReportError> {
        let mut env = new_environment();
        for section in Section::ORDER {
            let path = dir.join(format!("{}.j2", section.name()));
            if path.is_file() {
                let source = std::fs::read_to_string(&path).map_err(|source| ReportError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                env.add_template_owned(section.name(), source)
                    .map_err(|e| template_error(section, &e))?;
                tracing::debug!(
                    section = section.name(),
                    path = %path.display(),
                    "Template override loaded"
                );
            } else {
                env.add_template(section.name(), section.embedded_source())
                    .map_err(|e| template_error(section, &e))?;
            }
        }
        Ok(Self { env })
    }

    /// Render one section with `context`, trimming surrounding whitespace.
    pub fn render<C: Serialize>(
        &self,
        section: Section,
        context: &C,
    ) -> Result<String, ReportError> {
        let rendered = self
            .env
            .get_template(section.name())
            .map_err(|e| template_error(section, &e))?
            .render(context)
            .map_err(|e| template_error(section, &e))?;
        Ok(rendered.trim().to_owned())
    }
}

fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

fn template_error(section: Section, error: &minijinja::Error) -> ReportError {
    ReportError::Template {
        section: section.name().to_owned(),
        message: error.to_string(),
    }
}
