//! Two-valued state flipped by user input.

use std::fmt;

use crate::reactive::{create_signal, Signal};

pub use animate_state_macros::Toggle;

/// A type with exactly two values, each the other's opposite.
///
/// Derive it for two-variant enums with `#[derive(Toggle)]`.
pub trait Toggle: Clone + PartialEq + fmt::Debug + 'static {
    fn toggled(&self) -> Self;
}

impl Toggle for bool {
    fn toggled(&self) -> Self {
        !*self
    }
}

/// Holder for the end of an animation the UI currently targets.
///
/// `flip()` is the only mutation. Every flip writes the signal, so every
/// dependent binding retargets, even for flips in quick succession.
pub struct ToggleState<S: Toggle> {
    signal: Signal<S>,
}

impl<S: Toggle> Clone for ToggleState<S> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<S: Toggle> ToggleState<S> {
    pub fn new(initial: S) -> Self {
        Self {
            signal: create_signal(initial),
        }
    }

    /// Current member, tracked when read inside an effect
    pub fn get(&self) -> S {
        self.signal.get()
    }

    /// Switch to the other member
    pub fn flip(&self) {
        let next = self.signal.with_untracked(Toggle::toggled);
        log::debug!("flip -> {:?}", next);
        self.signal.set(next);
    }

    pub fn signal(&self) -> &Signal<S> {
        &self.signal
    }
}

impl<S: Toggle> fmt::Debug for ToggleState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ToggleState")
            .field(&self.signal.get_untracked())
            .finish()
    }
}

/// Fill color selector of the color demo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Toggle)]
pub enum BoxColor {
    Red,
    Magenta,
}

/// Horizontal end a moving box heads to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Toggle)]
pub enum BoxPosition {
    Start,
    End,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::reactive::create_effect;

    #[test]
    fn test_derived_toggle() {
        assert_eq!(BoxPosition::Start.toggled(), BoxPosition::End);
        assert_eq!(BoxPosition::End.toggled(), BoxPosition::Start);
        assert_eq!(BoxColor::Red.toggled(), BoxColor::Magenta);
        assert_eq!(BoxColor::Magenta.toggled(), BoxColor::Red);
    }

    #[test]
    fn test_flip_twice_round_trips() {
        let state = ToggleState::new(false);
        state.flip();
        assert!(state.get());
        state.flip();
        assert!(!state.get());
    }

    #[test]
    fn test_every_flip_notifies() {
        let state = ToggleState::new(BoxPosition::Start);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _effect = {
            let state = state.clone();
            let seen = seen.clone();
            create_effect(move || seen.borrow_mut().push(state.get()))
        };

        state.flip();
        state.flip();
        state.flip();
        assert_eq!(
            *seen.borrow(),
            vec![
                BoxPosition::Start,
                BoxPosition::End,
                BoxPosition::Start,
                BoxPosition::End
            ]
        );
    }
}
