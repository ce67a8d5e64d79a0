//! Polling host for the Solarwatch space-weather engine.
//!
//! Stands in for the application that owns the analysis engine: it
//! fetches a snapshot each cycle, keeps the previous one for trend
//! deltas, runs the pipeline, composes the situation report and publishes
//! both as JSON.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `solarwatch-config.yaml` (or `SOLARWATCH_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the snapshot source (collaborator file, demo fallback)
//! 4. Compile report templates and seed the phrase selector
//! 5. Run one cycle per polling interval, plus one per SIGHUP wake-up,
//!    until Ctrl-C

mod demo;
mod error;
mod source;
mod watch;

use std::path::PathBuf;
use std::time::Duration;

use solarwatch_core::WatchConfig;
use solarwatch_core::config::{LoggingConfig, PollingConfig};
use solarwatch_report::{SeededSelector, Synthesizer};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::demo::DemoSnapshotSource;
use crate::error::EngineError;
use crate::source::{FileSnapshotSource, SnapshotSource};
use crate::watch::{Trigger, Watch};

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "solarwatch-config.yaml";

/// Pending triggers beyond this are applied as back-pressure on the producers.
const TRIGGER_QUEUE: usize = 4;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, templates or signal handling
/// cannot be set up. Failures inside a running cycle are logged and the
/// loop continues.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = std::env::var("SOLARWATCH_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config_found = config_path.exists();
    let config = if config_found {
        WatchConfig::from_file(&config_path).map_err(EngineError::from)?
    } else {
        WatchConfig::default()
    };

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("solarwatch-engine starting");
    if config_found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        interval_secs = config.polling.interval_secs,
        run_once = config.polling.run_once,
        trend_baseline = ?config.polling.trend_baseline,
        wind_window = config.analysis.windows.wind,
        flare_window = config.analysis.windows.flare,
        "Analysis settings"
    );

    // 3. Snapshot source.
    let source = build_source(&config.polling);

    // 4. Report synthesis.
    let synthesizer = Synthesizer::from_config(&config).map_err(EngineError::from)?;
    let selector = SeededSelector::from_seed_option(config.report.seed);
    info!(
        seeded = config.report.seed.is_some(),
        custom_templates = config.report.templates_dir.is_some(),
        "Report synthesizer ready"
    );

    let run_once = config.polling.run_once;
    let interval = Duration::from_secs(config.polling.interval_secs.max(1));
    let mut watch = Watch::new(config, source, synthesizer, selector);

    // 5. Poll.
    if run_once {
        let output = watch.run_cycle()?;
        watch.publish(&output)?;
        return Ok(());
    }

    let (triggers_tx, mut triggers) = mpsc::channel(TRIGGER_QUEUE);
    spawn_ticker(interval, triggers_tx.clone());
    spawn_wake(Wake::install()?, triggers_tx);
    watch.serve(&mut triggers, shutdown_signal()).await;

    Ok(())
}

/// Emit a [`Trigger::Tick`] every `period`, the first immediately.
fn spawn_ticker(period: Duration, triggers: mpsc::Sender<Trigger>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if triggers.send(Trigger::Tick).await.is_err() {
                break;
            }
        }
    });
}

/// Forward each wake event as a [`Trigger::Wake`].
fn spawn_wake(mut wake: Wake, triggers: mpsc::Sender<Trigger>) {
    tokio::spawn(async move {
        loop {
            wake.recv().await;
            if triggers.send(Trigger::Wake).await.is_err() {
                break;
            }
        }
    });
}

/// Resolves on Ctrl-C. If the handler cannot be installed the engine
/// runs until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_source(polling: &PollingConfig) -> Box<dyn SnapshotSource> {
    let demo = DemoSnapshotSource::new(polling.demo_seed);
    match &polling.snapshot_path {
        Some(path) => {
            info!(path = %path.display(), "Reading collaborator snapshots");
            Box::new(FileSnapshotSource::new(path.clone(), demo))
        }
        None => {
            warn!("No snapshot path configured, serving demo data");
            Box::new(demo)
        }
    }
}

impl SnapshotSource for Box<dyn SnapshotSource> {
    fn fetch(&mut self) -> solarwatch_types::Snapshot {
        self.as_mut().fetch()
    }
}

/// The daemon's wake event: SIGHUP triggers an immediate refresh.
struct Wake {
    #[cfg(unix)]
    hangup: tokio::signal::unix::Signal,
}

impl Wake {
    #[cfg(unix)]
    fn install() -> Result<Self, EngineError> {
        use tokio::signal::unix::{SignalKind, signal};

        let hangup =
            signal(SignalKind::hangup()).map_err(|source| EngineError::Signal { source })?;
        Ok(Self { hangup })
    }

    #[cfg(not(unix))]
    #[allow(clippy::unnecessary_wraps)]
    fn install() -> Result<Self, EngineError> {
        Ok(Self {})
    }

    async fn recv(&mut self) {
        #[cfg(unix)]
        {
            if self.hangup.recv().await.is_none() {
                std::future::pending::<()>().await;
            }
        }
        #[cfg(not(unix))]
        {
            std::future::pending::<()>().await;
        }
    }
}
