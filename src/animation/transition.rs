//! Several animated values driven by one state change.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::reactive::{
    create_effect, create_signal, request_animation_frame, request_paint, Effect, ReadSignal,
    Signal,
};

use super::{AdvanceResult, Animatable, Animated, AnimationSpec, AnimationState};

/// The pair of states a transition is moving between
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<S> {
    pub initial_state: S,
    pub target_state: S,
}

impl<S: PartialEq> Segment<S> {
    pub fn is_transitioning_to(&self, initial_state: &S, target_state: &S) -> bool {
        self.initial_state == *initial_state && self.target_state == *target_state
    }
}

trait TransitionChild<S> {
    fn retarget(&mut self, segment: &Segment<S>);
    /// Move to `play_time_ms`; returns true while still running
    fn advance(&mut self, play_time_ms: f32) -> bool;
    fn duration_ms(&self) -> Option<f32>;
}

struct ChildAnimation<S, T: Animatable> {
    state: AnimationState<T>,
    spec_for: Box<dyn Fn(&Segment<S>) -> AnimationSpec<T>>,
    target_of: Box<dyn Fn(&S) -> T>,
    value: Signal<T>,
}

impl<S, T: Animatable> TransitionChild<S> for ChildAnimation<S, T> {
    fn retarget(&mut self, segment: &Segment<S>) {
        self.state.set_spec((self.spec_for)(segment));
        self.state.animate_to((self.target_of)(&segment.target_state));
    }

    fn advance(&mut self, play_time_ms: f32) -> bool {
        if let AdvanceResult::Changed(value) = self.state.advance_to_play_time(play_time_ms) {
            self.value.set(value);
            request_paint();
        }
        self.state.is_animating()
    }

    fn duration_ms(&self) -> Option<f32> {
        self.state.spec().duration_ms()
    }
}

struct TransitionInner<S> {
    label: String,
    current_state: S,
    segment: Segment<S>,
    /// Frame time of the first frame after the last state change
    start_time_ms: Option<f64>,
    children: Vec<Box<dyn TransitionChild<S>>>,
    running: bool,
}

impl<S: Clone + PartialEq + fmt::Debug> TransitionInner<S> {
    fn animate_to(&mut self, new_state: S) {
        if new_state == self.segment.target_state {
            return;
        }

        log::debug!(
            "transition `{}`: {:?} -> {:?}",
            self.label,
            self.current_state,
            new_state
        );
        self.segment = Segment {
            initial_state: self.current_state.clone(),
            target_state: new_state,
        };
        for child in &mut self.children {
            child.retarget(&self.segment);
        }
        self.start_time_ms = None;
        self.running = true;
        request_animation_frame();
    }
}

/// Child animations that retarget together whenever the observed state
/// changes and advance on a single shared play time.
///
/// The transition stays running until its slowest child finishes; only then
/// does [`current_state`](Self::current_state) catch up with the target.
pub struct Transition<S> {
    inner: Rc<RefCell<TransitionInner<S>>>,
    _effect: Effect,
}

/// Watch `state` and animate every child added with
/// [`Transition::animate`] when it changes.
pub fn update_transition<S>(state: &Signal<S>, label: impl Into<String>) -> Transition<S>
where
    S: Clone + PartialEq + fmt::Debug + 'static,
{
    let initial = state.get_untracked();
    let inner = Rc::new(RefCell::new(TransitionInner {
        label: label.into(),
        current_state: initial.clone(),
        segment: Segment {
            initial_state: initial.clone(),
            target_state: initial,
        },
        start_time_ms: None,
        children: Vec::new(),
        running: false,
    }));

    let effect = {
        let state = state.clone();
        let inner = inner.clone();
        create_effect(move || {
            let new_state = state.get();
            inner.borrow_mut().animate_to(new_state);
        })
    };

    Transition {
        inner,
        _effect: effect,
    }
}

impl<S> Transition<S>
where
    S: Clone + PartialEq + fmt::Debug + 'static,
{
    /// Add a child value. `spec_for` picks the animation for each segment,
    /// `target_of` maps a state to the value the child rests at.
    pub fn animate<T, F, G>(&self, spec_for: F, target_of: G) -> ReadSignal<T>
    where
        T: Animatable,
        F: Fn(&Segment<S>) -> AnimationSpec<T> + 'static,
        G: Fn(&S) -> T + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let initial = target_of(&inner.current_state);
        let value = create_signal(initial.clone());
        let mut child = ChildAnimation {
            state: AnimationState::new(initial, spec_for(&inner.segment)),
            spec_for: Box::new(spec_for),
            target_of: Box::new(target_of),
            value: value.clone(),
        };
        if inner.running {
            child.retarget(&inner.segment);
        }
        inner.children.push(Box::new(child));
        value.read_only()
    }

    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    /// State the transition last settled in
    pub fn current_state(&self) -> S {
        self.inner.borrow().current_state.clone()
    }

    pub fn target_state(&self) -> S {
        self.inner.borrow().segment.target_state.clone()
    }

    pub fn segment(&self) -> Segment<S> {
        self.inner.borrow().segment.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Longest child duration. `None` when a child has no fixed duration.
    pub fn total_duration_ms(&self) -> Option<f32> {
        self.inner
            .borrow()
            .children
            .iter()
            .try_fold(0.0_f32, |longest, child| {
                child.duration_ms().map(|duration| longest.max(duration))
            })
    }
}

impl<S> Animated for Transition<S>
where
    S: Clone + PartialEq + fmt::Debug + 'static,
{
    fn advance(&mut self, frame_time_ms: f64) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.running {
            return false;
        }

        let start_time = *inner.start_time_ms.get_or_insert(frame_time_ms);
        let play_time = (frame_time_ms - start_time).max(0.0) as f32;

        let mut any_running = false;
        for child in &mut inner.children {
            any_running |= child.advance(play_time);
        }

        if any_running {
            request_animation_frame();
        } else {
            inner.running = false;
            inner.start_time_ms = None;
            inner.current_state = inner.segment.target_state.clone();
            log::debug!(
                "transition `{}` settled in {:?} after {}ms",
                inner.label,
                inner.current_state,
                play_time
            );
        }
        any_running
    }
}

impl<S: fmt::Debug> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Transition")
            .field("label", &inner.label)
            .field("current_state", &inner.current_state)
            .field("segment", &inner.segment)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, TweenSpec};
    use crate::toggle::BoxPosition;
    use crate::widgets::Color;

    type Children = (Transition<BoxPosition>, ReadSignal<Color>, ReadSignal<f32>);

    fn color_and_motion(state: &Signal<BoxPosition>) -> Children {
        let transition = update_transition(state, "Color and Motion");
        let color = transition.animate(
            |_| TweenSpec::linear(4000.0).into(),
            |position| match position {
                BoxPosition::Start => Color::RED,
                BoxPosition::End => Color::MAGENTA,
            },
        );
        let offset = transition.animate(
            |_| AnimationSpec::tween(4000.0, Easing::LinearEasing),
            |position| match position {
                BoxPosition::Start => 0.0,
                BoxPosition::End => 341.0,
            },
        );
        (transition, color, offset)
    }

    #[test]
    fn test_children_start_at_initial_state() {
        let state = create_signal(BoxPosition::Start);
        let (transition, color, offset) = color_and_motion(&state);

        assert_eq!(color.get(), Color::RED);
        assert_eq!(offset.get(), 0.0);
        assert!(!transition.is_running());
        assert_eq!(transition.total_duration_ms(), Some(4000.0));
        assert_eq!(transition.label(), "Color and Motion");
    }

    #[test]
    fn test_children_advance_in_lockstep() {
        let state = create_signal(BoxPosition::Start);
        let (mut transition, color, offset) = color_and_motion(&state);

        state.set(BoxPosition::End);
        assert!(transition.is_running());
        assert_eq!(
            transition.segment(),
            Segment {
                initial_state: BoxPosition::Start,
                target_state: BoxPosition::End
            }
        );

        assert!(transition.advance(1000.0));
        assert!(transition.advance(3000.0));
        assert!((offset.get() - 170.5).abs() < 1e-3);
        assert!((color.get().b - 0.5).abs() < 1e-4);

        assert!(transition.advance(4999.0));
        assert!(offset.get() < 341.0);
        assert_eq!(transition.current_state(), BoxPosition::Start);

        assert!(!transition.advance(5000.0));
        assert_eq!(offset.get(), 341.0);
        assert_eq!(color.get(), Color::MAGENTA);
        assert_eq!(transition.current_state(), BoxPosition::End);
        assert!(!transition.advance(5016.0));
    }

    #[test]
    fn test_interrupted_transition_reverses_from_current_values() {
        let state = create_signal(BoxPosition::Start);
        let (mut transition, _color, offset) = color_and_motion(&state);

        state.set(BoxPosition::End);
        transition.advance(0.0);
        transition.advance(1000.0);
        let observed = offset.get();
        assert!((observed - 85.25).abs() < 1e-3);

        state.set(BoxPosition::Start);
        assert!(transition
            .segment()
            .is_transitioning_to(&BoxPosition::Start, &BoxPosition::Start));
        transition.advance(1016.0);
        assert!((offset.get() - observed).abs() < 1e-3);
        transition.advance(3016.0);
        assert!((offset.get() - observed / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_child_has_no_total_duration() {
        let state = create_signal(false);
        let transition = update_transition(&state, "spring");
        let _ = transition.animate(
            |_| AnimationSpec::<f32>::default(),
            |on| if *on { 1.0 } else { 0.0 },
        );
        let _ = transition.animate(
            |_| AnimationSpec::spring(0.5, 400.0).unwrap(),
            |on| if *on { 1.0 } else { 0.0 },
        );
        assert_eq!(transition.total_duration_ms(), None);
    }
}
