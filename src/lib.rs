//! Transitioned: a delayed prop-transition state machine
//!
//! A transitioned value watches a single target. When the target changes it
//! enters a transition for a fixed delay, exposing both the leaving
//! (`previous`) and arriving (`next`) values so a UI can cross-fade or
//! animate between them. When the delay elapses it settles on the new value.
//!
//! # Core Concepts
//!
//! - **State**: Immutable `TransitionState` snapshots handed to render callbacks
//! - **Policies**: Pure reducers deciding how a target or elapsed delay changes
//!   the snapshot (`Direct`, or `Indirect` through an intermediate `None`)
//! - **Timers**: A single owned, cancellable delay per value
//! - **Runtime**: tokio driver publishing snapshots over a watch channel
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use transitioned::builder::TransitionedBuilder;
//! use transitioned::timer::ManualTimer;
//! use transitioned::TransitionState;
//!
//! let mut value = TransitionedBuilder::new()
//!     .initial("A1")
//!     .delay_ms(500)
//!     .indirect()
//!     .build(ManualTimer::new())
//!     .unwrap();
//!
//! let label = |s: &TransitionState<&str>| {
//!     Some(format!("{:?} -> {:?} ({})", s.previous, s.next, s.transition))
//! };
//!
//! value.on_target_changed("A2");
//! assert_eq!(value.render(label).unwrap(), r#"Some("A1") -> None (true)"#);
//!
//! value.advance(Duration::from_millis(500));
//! assert_eq!(value.render(label).unwrap(), r#"None -> Some("A2") (true)"#);
//!
//! value.advance(Duration::from_millis(500));
//! assert_eq!(value.render(label).unwrap(), r#"None -> Some("A2") (false)"#);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod policy;
pub mod runtime;
pub mod timer;

// Re-export commonly used types
pub use builder::{TransitionConfig, TransitionedBuilder};
pub use crate::core::{Equality, Phase, TransitionState};
pub use machine::{IndirectTransitioned, RenderError, Transitioned};
pub use policy::{Direct, Indirect, Step, TransitionPolicy};
pub use timer::{ManualTimer, Timer, TimerId};
