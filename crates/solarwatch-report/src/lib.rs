//! Situation-report synthesis for Solarwatch.
//!
//! Turns an [`Assessment`](solarwatch_types::Assessment) into four ordered
//! prose sections -- Status, Dynamics, Forecast, Physics -- joined by blank
//! lines.
//!
//! # Modules
//!
//! - [`selector`] -- The injectable phrase-variant selector.
//! - [`phrases`] -- Phrase tables and wording tiers.
//! - [`templates`] -- `minijinja` section templates with directory overrides.
//! - [`synthesizer`] -- Maps an assessment onto the templates.
//! - [`report`] -- The composed [`SituationReport`].
//! - [`error`] -- [`ReportError`].

pub mod error;
pub mod phrases;
pub mod report;
pub mod selector;
pub mod synthesizer;
pub mod templates;

pub use error::ReportError;
pub use report::SituationReport;
pub use selector::{FixedSelector, PhraseSelector, SeededSelector};
pub use synthesizer::Synthesizer;
pub use templates::{Section, SectionTemplates};
