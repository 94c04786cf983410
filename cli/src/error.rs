//! Error types for the wrapper binary.

use thiserror::Error;

/// Failures running the wrapped command.
///
/// Classification and coloring never fail; only process and stream I/O can.
#[derive(Debug, Error)]
pub enum CliError {
    /// The wrapped binary could not be started.
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the wrapped process failed.
    #[error("failed to wait for the wrapped command: {0}")]
    Wait(#[source] std::io::Error),

    /// Reading the wrapped output or writing colored output failed.
    #[error("output stream error: {0}")]
    Stream(#[source] std::io::Error),
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
