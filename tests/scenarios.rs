//! Render-level scenarios for direct and indirect transitioned values.
//!
//! Each test drives a value the way a host component would: feed targets,
//! render a label, and run the pending timers one batch at a time.

use std::time::Duration;
use transitioned::builder::TransitionedBuilder;
use transitioned::timer::ManualTimer;
use transitioned::{Direct, Indirect, Transitioned, TransitionState};

const DELAY: Duration = Duration::from_millis(500);

/// Labels compare equal when their second character matches.
fn same_index(u: &String, v: &String) -> bool {
    u.as_bytes().get(1) == v.as_bytes().get(1)
}

fn label(b: &str, state: &TransitionState<String>) -> String {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "null".to_string());

    if state.transition {
        format!(
            "b is {b}; a transition from {} to {}",
            show(&state.previous),
            show(&state.next)
        )
    } else {
        format!("b is {b}; a is {}", show(&state.next))
    }
}

struct Component<P> {
    a: Transitioned<String, P, ManualTimer>,
    b: String,
}

impl<P: transitioned::TransitionPolicy<String>> Component<P> {
    fn set_a(&mut self, a: &str) {
        self.a.on_target_changed(a.to_string());
    }

    fn set_b(&mut self, b: &str) {
        self.b = b.to_string();
    }

    fn render(&self) -> String {
        self.a
            .render(|state| Some(label(&self.b, state)))
            .unwrap_or_default()
    }

    fn scheduled(&self) -> &[Duration] {
        self.a.timer().scheduled()
    }

    fn run_only_pending_timers(&mut self) {
        self.a.run_pending_timers();
    }
}

fn direct(a: &str, b: &str) -> Component<Direct> {
    Component {
        a: TransitionedBuilder::new()
            .initial(a.to_string())
            .delay(DELAY)
            .equal(same_index)
            .build(ManualTimer::recording())
            .unwrap(),
        b: b.to_string(),
    }
}

fn indirect(a: &str, b: &str) -> Component<Indirect> {
    Component {
        a: TransitionedBuilder::new()
            .initial(a.to_string())
            .delay(DELAY)
            .equal(same_index)
            .indirect()
            .build(ManualTimer::recording())
            .unwrap(),
        b: b.to_string(),
    }
}

mod direct_value {
    use super::*;

    #[test]
    fn initial_render_has_no_transition() {
        let component = direct("A1", "B1");
        assert_eq!(component.render(), "b is B1; a is A1");
    }

    #[test]
    fn unrelated_prop_does_not_transition() {
        let mut component = direct("A1", "B1");

        component.set_b("B2");

        assert_eq!(component.render(), "b is B2; a is A1");
        assert!(component.scheduled().is_empty());
    }

    #[test]
    fn new_value_transitions_for_one_delay() {
        let mut component = direct("A1", "B1");

        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from A1 to A2");
        assert_eq!(component.scheduled(), &[DELAY]);

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A2");
        assert_eq!(component.scheduled().len(), 1);
    }

    #[test]
    fn same_value_does_not_transition() {
        let mut component = direct("A1", "B1");

        component.set_a("A1");

        assert_eq!(component.render(), "b is B1; a is A1");
        assert!(component.scheduled().is_empty());
    }

    #[test]
    fn value_equal_by_comparator_is_ignored() {
        let mut component = direct("A1", "B1");

        component.set_a("A1_");

        assert_eq!(component.render(), "b is B1; a is A1");
        assert!(component.scheduled().is_empty());
    }

    #[test]
    fn new_value_during_delay_restarts_from_current() {
        let mut component = direct("A1", "B1");

        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from A1 to A2");

        component.set_a("A3");
        assert_eq!(component.render(), "b is B1; a transition from A2 to A3");

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A3");
    }

    #[test]
    fn same_value_during_delay_keeps_transition() {
        let mut component = direct("A1", "B1");

        component.set_a("A2");
        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from A1 to A2");
        assert_eq!(component.scheduled().len(), 1);

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A2");
    }
}

mod indirect_value {
    use super::*;

    #[test]
    fn initial_render_has_no_transition() {
        let component = indirect("A1", "B1");
        assert_eq!(component.render(), "b is B1; a is A1");
    }

    #[test]
    fn unrelated_prop_does_not_transition() {
        let mut component = indirect("A1", "B1");

        component.set_b("B2");

        assert_eq!(component.render(), "b is B2; a is A1");
    }

    #[test]
    fn new_value_goes_through_null() {
        let mut component = indirect("A1", "B1");

        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from A1 to null");
        assert_eq!(component.scheduled(), &[DELAY]);

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a transition from null to A2");
        assert_eq!(component.scheduled(), &[DELAY, DELAY]);

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A2");
        assert_eq!(component.scheduled().len(), 2);
    }

    #[test]
    fn same_value_does_not_transition() {
        let mut component = indirect("A1", "B1");

        component.set_a("A1");
        component.set_a("A1_");

        assert_eq!(component.render(), "b is B1; a is A1");
        assert!(component.scheduled().is_empty());
    }

    #[test]
    fn new_value_during_null_leg_arrives_from_null() {
        let mut component = indirect("A1", "B1");

        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from A1 to null");

        component.set_a("A3");
        assert_eq!(component.render(), "b is B1; a transition from null to A3");

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A3");
    }

    #[test]
    fn new_value_during_arrival_leaves_through_null_again() {
        let mut component = indirect("A1", "B1");

        component.set_a("A2");
        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a transition from null to A2");

        component.set_a("A3");
        assert_eq!(component.render(), "b is B1; a transition from A2 to null");

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a transition from null to A3");

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A3");
    }

    #[test]
    fn queued_value_during_null_leg_is_ignored() {
        let mut component = indirect("A1", "B1");

        component.set_a("A2");
        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from A1 to null");
        assert_eq!(component.scheduled().len(), 1);

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a transition from null to A2");

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A2");
    }

    #[test]
    fn same_value_during_arrival_keeps_transition() {
        let mut component = indirect("A1", "B1");

        component.set_a("A2");
        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a transition from null to A2");

        component.set_a("A2");
        assert_eq!(component.render(), "b is B1; a transition from null to A2");

        component.run_only_pending_timers();
        assert_eq!(component.render(), "b is B1; a is A2");
    }
}

mod teardown {
    use super::*;

    #[test]
    fn dispose_cancels_pending_timer() {
        let mut component = indirect("A1", "B1");
        component.set_a("A2");

        component.a.on_dispose();
        component.run_only_pending_timers();

        assert_eq!(component.a.timer().pending_count(), 0);
        assert_eq!(component.a.timer().cancelled(), 1);
        assert_eq!(component.render(), "b is B1; a transition from A1 to null");
    }

    #[test]
    fn advance_after_dispose_changes_nothing() {
        let mut component = direct("A1", "B1");
        component.set_a("A2");
        component.a.on_dispose();

        assert_eq!(component.a.advance(DELAY * 10), 0);
        assert_eq!(component.render(), "b is B1; a transition from A1 to A2");
    }
}
