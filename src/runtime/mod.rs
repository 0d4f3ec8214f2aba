//! Async driver running a transitioned value on the tokio runtime.
//!
//! [`spawn`] moves a value built on a [`DeadlineTimer`](crate::timer::DeadlineTimer)
//! into a background task. The task applies targets sent through the
//! returned [`TransitionHandle`], sleeps until the pending deadline, and
//! publishes a fresh snapshot whenever the state revision moves.

mod error;
mod handle;

pub use error::RuntimeError;
pub use handle::{spawn, TransitionHandle};
