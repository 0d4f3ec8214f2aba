//! Transition configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay used when none (or zero) is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(5000);

/// Serializable settings of a transitioned value.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use transitioned::builder::TransitionConfig;
///
/// assert_eq!(TransitionConfig::default().delay(), Duration::from_millis(5000));
/// assert_eq!(TransitionConfig::with_delay_ms(0).delay(), Duration::from_millis(5000));
/// assert_eq!(TransitionConfig::with_delay_ms(250).delay(), Duration::from_millis(250));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Milliseconds before a transition resolves. Absent or zero means
    /// [`DEFAULT_DELAY`].
    pub delay_ms: Option<u64>,
}

impl TransitionConfig {
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            delay_ms: Some(delay_ms),
        }
    }

    /// Effective delay.
    pub fn delay(&self) -> Duration {
        match self.delay_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => DEFAULT_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_delay_defaults() {
        let config: TransitionConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.delay_ms, None);
        assert_eq!(config.delay(), DEFAULT_DELAY);
    }

    #[test]
    fn zero_delay_defaults() {
        let config: TransitionConfig = serde_json::from_str(r#"{"delay_ms":0}"#).unwrap();

        assert_eq!(config.delay(), DEFAULT_DELAY);
    }

    #[test]
    fn explicit_delay_is_used() {
        let config: TransitionConfig = serde_json::from_str(r#"{"delay_ms":500}"#).unwrap();

        assert_eq!(config.delay(), Duration::from_millis(500));
    }

    #[test]
    fn config_serializes_correctly() {
        let config = TransitionConfig::with_delay_ms(750);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TransitionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
