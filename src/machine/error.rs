//! Render contract errors.

use thiserror::Error;

/// Errors raised when a render callback breaks its contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Render callback must produce at most one node, got {count}")]
    MultipleChildren { count: usize },
}
