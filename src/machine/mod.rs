//! The transitioned value: policy, equality and timer bound together.
//!
//! [`Transitioned`] is the imperative shell around the pure policies. It
//! owns the only pending timer, guarantees cancel-before-reschedule and
//! cancel-on-dispose, and exposes explicit lifecycle calls for the host:
//!
//! - [`Transitioned::on_target_changed`] when the watched value changes
//! - [`Transitioned::fire`] when a scheduled delay expires
//! - [`Transitioned::on_dispose`] on teardown (also done on drop)

mod error;
mod render;
mod transitioned;

pub use error::RenderError;
pub use transitioned::{IndirectTransitioned, Transitioned};
