//! Render callback plumbing.
//!
//! The render callback receives the live snapshot and produces at most one
//! node. `render` encodes that in its return type; `render_only` accepts
//! callbacks that build a collection and rejects more than one node.

use super::error::RenderError;
use super::transitioned::Transitioned;
use crate::core::TransitionState;
use crate::timer::Timer;

impl<T, P, Tm: Timer> Transitioned<T, P, Tm> {
    /// Invoke `children` with the current snapshot.
    pub fn render<N, F>(&self, children: F) -> Option<N>
    where
        F: FnOnce(&TransitionState<T>) -> Option<N>,
    {
        children(self.state())
    }

    /// Invoke `children` and require it to yield zero or one node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transitioned::builder::TransitionedBuilder;
    /// use transitioned::machine::RenderError;
    /// use transitioned::timer::ManualTimer;
    ///
    /// let value = TransitionedBuilder::new()
    ///     .initial(1)
    ///     .build(ManualTimer::new())
    ///     .unwrap();
    ///
    /// let one = value.render_only(|s| s.next.map(|n| format!("n = {n}")));
    /// assert_eq!(one, Ok(Some("n = 1".to_string())));
    ///
    /// let two = value.render_only(|_| vec!["a", "b"]);
    /// assert_eq!(two, Err(RenderError::MultipleChildren { count: 2 }));
    /// ```
    pub fn render_only<I, F>(&self, children: F) -> Result<Option<I::Item>, RenderError>
    where
        F: FnOnce(&TransitionState<T>) -> I,
        I: IntoIterator,
    {
        let mut nodes = children(self.state()).into_iter();
        let first = nodes.next();
        let extra = nodes.count();

        if extra > 0 {
            return Err(RenderError::MultipleChildren { count: extra + 1 });
        }

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equality;
    use crate::policy::Direct;
    use crate::timer::ManualTimer;
    use std::time::Duration;

    fn describe(state: &TransitionState<&str>) -> String {
        match (state.transition, state.previous, state.next) {
            (false, _, next) => format!("a is {}", next.unwrap_or("null")),
            (true, previous, next) => format!(
                "a transition from {} to {}",
                previous.unwrap_or("null"),
                next.unwrap_or("null")
            ),
        }
    }

    fn value() -> Transitioned<&'static str, Direct, ManualTimer> {
        Transitioned::from_parts(
            Some("A1"),
            Direct,
            Equality::strict(),
            Duration::from_millis(500),
            ManualTimer::new(),
            None,
        )
    }

    #[test]
    fn render_passes_live_snapshot() {
        let mut value = value();
        assert_eq!(
            value.render(|s| Some(describe(s))).as_deref(),
            Some("a is A1")
        );

        value.on_target_changed("A2");
        assert_eq!(
            value.render(|s| Some(describe(s))).as_deref(),
            Some("a transition from A1 to A2")
        );
    }

    #[test]
    fn render_may_produce_nothing() {
        let value = value();
        assert_eq!(value.render(|_| None::<String>), None);
    }

    #[test]
    fn render_only_accepts_empty_and_single() {
        let value = value();

        assert_eq!(value.render_only(|_| Vec::<String>::new()), Ok(None));
        assert_eq!(
            value.render_only(|s| vec![describe(s)]),
            Ok(Some("a is A1".to_string()))
        );
    }

    #[test]
    fn render_only_rejects_multiple_nodes() {
        let value = value();

        let result = value.render_only(|_| ["x", "y", "z"]);

        assert_eq!(result, Err(RenderError::MultipleChildren { count: 3 }));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Render callback must produce at most one node, got 3"
        );
    }
}
