//! Builder API for constructing transitioned values.
//!
//! Configuration comes either from individual setters or from a
//! [`TransitionConfig`], typically deserialized alongside the rest of a
//! host's settings.

pub mod config;
pub mod error;
pub mod machine;

pub use config::{TransitionConfig, DEFAULT_DELAY};
pub use error::BuildError;
pub use machine::TransitionedBuilder;
