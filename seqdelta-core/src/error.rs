//! Structured error types for the seqdelta ecosystem.

use thiserror::Error;

/// Unified error type for all seqdelta operations.
///
/// The three variants map to three different caller reactions:
/// [`Input`](SeqDeltaError::Input) is correctable by the client,
/// [`Capacity`](SeqDeltaError::Capacity) asks the client to switch to chunked
/// or deferred processing, and [`Internal`](SeqDeltaError::Internal) is a bug
/// surfaced as a generic failure. None of them is retried automatically.
#[derive(Debug, Error)]
pub enum SeqDeltaError {
    /// Invalid input (empty sequence, malformed chunk set, bad parameters).
    #[error("invalid input: {0}")]
    Input(String),

    /// The requested alignment exceeds the configured matrix ceiling.
    #[error(
        "sequences too large to align: {cells} matrix cells exceeds the limit of {limit}; \
         upload the sequences in chunks or raise the ceiling"
    )]
    Capacity { cells: u64, limit: u64 },

    /// Unexpected failure during matrix construction or traceback.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SeqDeltaError {
    /// Whether the error is correctable by fixing the request input.
    pub fn is_input(&self) -> bool {
        matches!(self, SeqDeltaError::Input(_))
    }
}

/// Convenience alias used throughout the seqdelta workspace.
pub type Result<T> = std::result::Result<T, SeqDeltaError>;
