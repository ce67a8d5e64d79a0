//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error that wraps every failure mode
//! of startup and of a single analysis cycle.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: solarwatch_core::ConfigError,
    },

    /// Report templates failed to load or render.
    #[error("report error: {source}")]
    Report {
        /// The underlying report error.
        #[from]
        source: solarwatch_report::ReportError,
    },

    /// Cycle output could not be serialized.
    #[error("serialization error: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Cycle output could not be written.
    #[error("failed to write output {path}: {source}")]
    Output {
        /// The output file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The wake signal handler could not be installed.
    #[error("signal setup failed: {source}")]
    Signal {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
