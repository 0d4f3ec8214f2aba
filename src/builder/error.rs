//! Build errors for transitioned values.

use thiserror::Error;

/// Errors that can occur when building a transitioned value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial target not specified. Call .initial(target) before .build()")]
    MissingInitialTarget,

    #[error("No comparator given. Call .equal(comparator) before .build_compared()")]
    MissingComparator,
}
