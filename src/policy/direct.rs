use super::{Step, TransitionPolicy};
use crate::core::{Equality, TransitionState};

/// Transition straight from the current value to the new one.
///
/// ```text
/// next: a      --b-->   next: b, previous: a   --delay-->   next: b
/// transition: false     transition: true                    transition: false
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direct;

impl<T: Clone> TransitionPolicy<T> for Direct {
    fn name(&self) -> &'static str {
        "Direct"
    }

    fn receive(
        &self,
        state: &TransitionState<T>,
        target: Option<T>,
        equality: &Equality<T>,
    ) -> Step<T> {
        if equality.equal(&state.next, &target) {
            return Step::Unchanged;
        }

        Step::Schedule(TransitionState::direct(state.next.clone(), target))
    }

    fn elapse(&self, state: &TransitionState<T>) -> Step<T> {
        Step::Settle(TransitionState::idle(state.next.clone()))
    }
}
