//! Error types for report synthesis.

/// Errors that can occur while loading or rendering section templates.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A template failed to compile or render.
    #[error("template error in {section}: {message}")]
    Template {
        /// The section whose template failed.
        section: String,
        /// The template engine's message.
        message: String,
    },

    /// A template override could not be read from disk.
    #[error("failed to read template {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
