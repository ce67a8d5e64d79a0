//! The analysis cycle run on every poll.
//!
//! [`Watch`] owns the only cross-cycle state in the system: the snapshot
//! from the previous cycle, retained for trend deltas when configured.
//! Cycles are serialized by `&mut self`; at most one runs at a time.

use std::future::Future;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use solarwatch_core::{TrendBaseline, WatchConfig, analyze};
use solarwatch_report::{PhraseSelector, SituationReport, Synthesizer};
use solarwatch_types::{Assessment, Snapshot};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::error::EngineError;
use crate::source::SnapshotSource;

/// Everything published for one cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleOutput {
    /// Monotonic cycle counter, starting at 1.
    pub cycle: u64,
    /// When the cycle ran.
    pub generated_at: DateTime<Utc>,
    /// Classifications for the presentation layer.
    pub assessment: Assessment,
    /// The four report sections.
    pub report: SituationReport,
    /// The sections joined into one multi-paragraph string.
    pub narrative: String,
}

/// What prompts the host loop to run a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The polling interval elapsed.
    Tick,
    /// A wake event asked for an immediate refresh.
    Wake,
}

/// Runs analysis cycles against a snapshot source.
pub struct Watch<S, P> {
    config: WatchConfig,
    source: S,
    synthesizer: Synthesizer,
    selector: P,
    previous: Option<Snapshot>,
    cycles: u64,
}

impl<S: SnapshotSource, P: PhraseSelector> Watch<S, P> {
    /// Assemble a watch from its collaborators.
    pub const fn new(
        config: WatchConfig,
        source: S,
        synthesizer: Synthesizer,
        selector: P,
    ) -> Self {
        Self {
            config,
            source,
            synthesizer,
            selector,
            previous: None,
            cycles: 0,
        }
    }

    /// Fetch, analyze and report once.
    pub fn run_cycle(&mut self) -> Result<CycleOutput, EngineError> {
        let snapshot = self.source.fetch();
        if !snapshot.is_time_ordered() {
            warn!("Snapshot series are not time-ordered; trends may be unreliable");
        }

        let prior = match self.config.polling.trend_baseline {
            TrendBaseline::PreviousCycle => self.previous.as_ref(),
            TrendBaseline::PrecedingWindow => None,
        };
        let assessment = analyze(&snapshot, prior, &self.config.analysis);
        let report = self.synthesizer.compose(&assessment, &mut self.selector)?;
        self.previous = Some(snapshot);
        self.cycles = self.cycles.saturating_add(1);

        info!(
            cycle = self.cycles,
            score = assessment.danger.score,
            label = ?assessment.danger.label,
            color = assessment.danger.label.color(),
            kp = assessment.metrics.last_kp,
            wind_speed = assessment.metrics.wind_speed,
            flare_class = %assessment.metrics.flare_class,
            source = ?assessment.source,
            peaks = assessment.flares.len(),
            is_demo = assessment.is_demo,
            "Cycle complete"
        );

        Ok(CycleOutput {
            cycle: self.cycles,
            generated_at: Utc::now(),
            narrative: report.text(),
            assessment,
            report,
        })
    }

    /// Write `output` as JSON to the configured path, or stdout when unset.
    pub fn publish(&self, output: &CycleOutput) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(output)?;
        match &self.config.polling.output_path {
            Some(path) => write_atomically(path, &json),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    /// Run one cycle per trigger until `shutdown` resolves or every
    /// trigger sender is dropped.
    ///
    /// Shutdown takes priority over triggers already queued. A failed
    /// cycle is logged and the loop keeps serving.
    pub async fn serve<F>(&mut self, triggers: &mut mpsc::Receiver<Trigger>, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            let trigger = tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!(cycles = self.cycles(), "Shutdown requested");
                    break;
                }
                trigger = triggers.recv() => match trigger {
                    Some(trigger) => trigger,
                    None => {
                        info!(cycles = self.cycles(), "Trigger sources closed");
                        break;
                    }
                },
            };

            if trigger == Trigger::Wake {
                info!("Wake signal received, refreshing now");
            }
            match self.run_cycle() {
                Ok(output) => {
                    if let Err(e) = self.publish(&output) {
                        warn!(error = %e, "Failed to publish cycle output");
                    }
                }
                Err(e) => error!(error = %e, "Analysis cycle failed"),
            }
        }
    }

    /// Number of completed cycles.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }
}

/// Write to a sibling temp file and rename, so readers never see a
/// half-written document.
fn write_atomically(path: &Path, contents: &str) -> Result<(), EngineError> {
    let tmp = path.with_extension("tmp");
    let to_error = |source| EngineError::Output {
        path: path.display().to_string(),
        source,
    };
    std::fs::write(&tmp, contents).map_err(to_error)?;
    std::fs::rename(&tmp, path).map_err(to_error)
}
