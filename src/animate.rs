//! Values that follow a state signal through an animation.
//!
//! A binding registers an effect on the state signal. Whenever the state
//! changes the effect retargets an [`AnimationState`], and the frame driver
//! moves it forward through [`Animated::advance`]. Widgets read the result
//! through [`AnimatedValue::value`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::animation::{AdvanceResult, Animatable, Animated, AnimationSpec, AnimationState};
use crate::reactive::{
    create_effect, create_signal, request_animation_frame, request_paint, Effect, ReadSignal,
    Signal,
};
use crate::widgets::Color;

pub struct AnimatedValue<T: Animatable> {
    label: String,
    state: Rc<RefCell<AnimationState<T>>>,
    value: Signal<T>,
    _effect: Effect,
}

impl<T: Animatable> AnimatedValue<T> {
    /// Interpolated value, readable from widget properties
    pub fn value(&self) -> ReadSignal<T> {
        self.value.read_only()
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn target(&self) -> T {
        self.state.borrow().target().clone()
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_animating()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: Animatable> Animated for AnimatedValue<T> {
    fn advance(&mut self, frame_time_ms: f64) -> bool {
        let (result, running) = {
            let mut state = self.state.borrow_mut();
            let result = state.advance(frame_time_ms);
            (result, state.is_animating())
        };

        if let AdvanceResult::Changed(value) = result {
            log::trace!("{} = {:?} at {}ms", self.label, value, frame_time_ms);
            self.value.set(value);
            request_paint();
        }
        if running {
            request_animation_frame();
        }
        running
    }
}

impl<T: Animatable> fmt::Debug for AnimatedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("label", &self.label)
            .field("state", &self.state.borrow())
            .finish()
    }
}

/// Animate towards `target_of(state)` every time `state` changes.
///
/// The value starts at rest on the target of the current state. A change
/// while running continues from the value on screen, never from the old
/// start.
pub fn animate_value_as_state<S, T, F>(
    state: &Signal<S>,
    target_of: F,
    spec: impl Into<AnimationSpec<T>>,
    label: impl Into<String>,
) -> AnimatedValue<T>
where
    S: 'static,
    T: Animatable,
    F: Fn(&S) -> T + 'static,
{
    let label = label.into();
    let initial = state.with_untracked(&target_of);
    let animation = Rc::new(RefCell::new(AnimationState::new(
        initial.clone(),
        spec.into(),
    )));

    let effect = {
        let state = state.clone();
        let animation = animation.clone();
        create_effect(move || {
            let target = state.with(&target_of);
            let mut animation = animation.borrow_mut();
            animation.animate_to(target);
            if animation.is_animating() {
                request_animation_frame();
            }
        })
    };

    AnimatedValue {
        label,
        state: animation,
        value: create_signal(initial),
        _effect: effect,
    }
}

/// Scalar binding, e.g. a rotation angle in degrees
pub fn animate_float_as_state<S, F>(
    state: &Signal<S>,
    target_of: F,
    spec: impl Into<AnimationSpec<f32>>,
    label: impl Into<String>,
) -> AnimatedValue<f32>
where
    S: 'static,
    F: Fn(&S) -> f32 + 'static,
{
    animate_value_as_state(state, target_of, spec, label)
}

/// Binding for a length in density-independent pixels
pub fn animate_dp_as_state<S, F>(
    state: &Signal<S>,
    target_of: F,
    spec: impl Into<AnimationSpec<f32>>,
    label: impl Into<String>,
) -> AnimatedValue<f32>
where
    S: 'static,
    F: Fn(&S) -> f32 + 'static,
{
    animate_value_as_state(state, target_of, spec, label)
}

pub fn animate_color_as_state<S, F>(
    state: &Signal<S>,
    target_of: F,
    spec: impl Into<AnimationSpec<Color>>,
    label: impl Into<String>,
) -> AnimatedValue<Color>
where
    S: 'static,
    F: Fn(&S) -> Color + 'static,
{
    animate_value_as_state(state, target_of, spec, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, TweenSpec};
    use crate::reactive::has_animations;
    use crate::toggle::{BoxColor, ToggleState};

    fn rotation(rotated: &ToggleState<bool>) -> AnimatedValue<f32> {
        animate_float_as_state(
            rotated.signal(),
            |rotated| if *rotated { 360.0 } else { 0.0 },
            AnimationSpec::tween(2500.0, Easing::LinearEasing),
            "rotation",
        )
    }

    #[test]
    fn test_starts_at_rest_on_initial_target() {
        let rotated = ToggleState::new(false);
        let angle = rotation(&rotated);

        assert_eq!(angle.get(), 0.0);
        assert!(!angle.is_running());
        assert_eq!(angle.label(), "rotation");
    }

    #[test]
    fn test_flip_retargets_and_requests_frames() {
        let rotated = ToggleState::new(false);
        let mut angle = rotation(&rotated);

        rotated.flip();
        assert!(angle.is_running());
        assert_eq!(angle.target(), 360.0);
        assert!(has_animations());

        assert!(angle.advance(0.0));
        assert!(angle.advance(1250.0));
        assert!((angle.get() - 180.0).abs() < 1e-3);
        assert!(!angle.advance(2500.0));
        assert_eq!(angle.get(), 360.0);
    }

    #[test]
    fn test_two_flips_return_to_initial_target() {
        let rotated = ToggleState::new(false);
        let angle = rotation(&rotated);

        rotated.flip();
        rotated.flip();
        assert_eq!(angle.target(), 0.0);
    }

    #[test]
    fn test_color_binding_maps_state_inverted() {
        let state = ToggleState::new(BoxColor::Magenta);
        let mut color = animate_color_as_state(
            state.signal(),
            |state| match state {
                BoxColor::Red => Color::MAGENTA,
                BoxColor::Magenta => Color::RED,
            },
            TweenSpec::new(4500.0),
            "color",
        );
        assert_eq!(color.get(), Color::RED);

        state.flip();
        color.advance(0.0);
        color.advance(4500.0);
        assert_eq!(color.get(), Color::MAGENTA);
    }

    #[test]
    fn test_dropped_binding_stops_following() {
        let rotated = ToggleState::new(false);
        let angle = rotation(&rotated);
        let state = angle.state.clone();
        drop(angle);

        rotated.flip();
        assert!(!state.borrow().is_animating());
    }
}
