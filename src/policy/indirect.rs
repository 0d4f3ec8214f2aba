use super::{Step, TransitionPolicy};
use crate::core::{Equality, TransitionState};

/// Transition between two present values through an intermediate `None`.
///
/// ```text
/// next: a          --b-->   next: null         --delay-->   next: b          --delay-->   next: b
/// previous: null            previous: a                     previous: null                previous: null
/// transition: false         transition: true                transition: true              transition: false
///                           indirect_next: b                indirect_next: null
/// ```
///
/// When either endpoint is already `None` there is nothing to fade through
/// and the policy behaves like [`Direct`](super::Direct).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indirect;

impl<T: Clone> TransitionPolicy<T> for Indirect {
    fn name(&self) -> &'static str {
        "Indirect"
    }

    fn receive(
        &self,
        state: &TransitionState<T>,
        target: Option<T>,
        equality: &Equality<T>,
    ) -> Step<T> {
        // Already queued behind the null leg.
        if state.transition_indirect && equality.equal(&state.indirect_next, &target) {
            return Step::Unchanged;
        }

        if equality.equal(&state.next, &target) {
            return Step::Unchanged;
        }

        match (&state.next, &target) {
            (Some(_), Some(_)) => {
                Step::Schedule(TransitionState::to_null(state.next.clone(), target))
            }
            _ => Step::Schedule(TransitionState::direct(state.next.clone(), target)),
        }
    }

    fn elapse(&self, state: &TransitionState<T>) -> Step<T> {
        match &state.indirect_next {
            Some(_) => Step::Schedule(TransitionState::direct(None, state.indirect_next.clone())),
            None => Step::Settle(TransitionState::idle(state.next.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_to_present_goes_through_null() {
        let state = TransitionState::idle(Some("A1"));

        let step = Indirect.receive(&state, Some("A2"), &Equality::strict());

        assert_eq!(
            step,
            Step::Schedule(TransitionState::to_null(Some("A1"), Some("A2")))
        );
    }

    #[test]
    fn first_leg_elapse_schedules_second_leg() {
        let state = TransitionState::to_null(Some("A1"), Some("A2"));

        let step = Indirect.elapse(&state);

        assert_eq!(
            step,
            Step::Schedule(TransitionState::direct(None, Some("A2")))
        );
        assert!(step.state().is_some_and(|s| s.transition && !s.is_indirect()));
    }

    #[test]
    fn second_leg_elapse_settles() {
        let state = TransitionState::direct(None, Some("A2"));

        assert_eq!(
            Indirect.elapse(&state),
            Step::Settle(TransitionState::idle(Some("A2")))
        );
    }

    #[test]
    fn queued_target_is_suppressed() {
        let state = TransitionState::to_null(Some("A1"), Some("A2"));

        assert!(Indirect
            .receive(&state, Some("A2"), &Equality::strict())
            .is_unchanged());
    }

    #[test]
    fn retarget_during_null_leg_goes_direct_from_null() {
        let state = TransitionState::to_null(Some("A1"), Some("A2"));

        let step = Indirect.receive(&state, Some("A3"), &Equality::strict());

        assert_eq!(
            step,
            Step::Schedule(TransitionState::direct(None, Some("A3")))
        );
    }

    #[test]
    fn retarget_during_second_leg_goes_through_null_again() {
        let state = TransitionState::direct(None, Some("A2"));

        let step = Indirect.receive(&state, Some("A3"), &Equality::strict());

        assert_eq!(
            step,
            Step::Schedule(TransitionState::to_null(Some("A2"), Some("A3")))
        );
    }

    #[test]
    fn null_endpoint_transitions_directly() {
        let equality = Equality::strict();

        assert_eq!(
            Indirect.receive(&TransitionState::idle(Some(1)), None, &equality),
            Step::Schedule(TransitionState::direct(Some(1), None))
        );
        assert_eq!(
            Indirect.receive(&TransitionState::idle(None), Some(1), &equality),
            Step::Schedule(TransitionState::direct(None, Some(1)))
        );
    }

    #[test]
    fn queued_target_uses_custom_equality() {
        let equality = Equality::by(|a: &&str, b: &&str| a.as_bytes()[1] == b.as_bytes()[1]);
        let state = TransitionState::to_null(Some("A1"), Some("A2"));

        assert!(Indirect.receive(&state, Some("B2"), &equality).is_unchanged());
    }
}
