//! Errors reported by the async driver.

use thiserror::Error;

/// Error returned when talking to the driver task.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The driver task is no longer running.
    #[error("Transition task is closed")]
    Closed,

    /// The driver task panicked or was cancelled.
    #[error("Transition task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
