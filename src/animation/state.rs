use super::{Animatable, AnimationSpec};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Running animation of a single value.
///
/// Retargeting while running starts the new animation from the current
/// instantaneous value and velocity, so the value never jumps and a spring
/// keeps its momentum.
#[derive(Debug, Clone)]
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value the animation is heading to
    target: T,
    /// Value when animation started
    start: T,
    /// Per-channel velocity at `start`
    start_velocity: Vec<f32>,
    /// Per-channel velocity at `current`
    velocity: Vec<f32>,
    spec: AnimationSpec<T>,
    /// Frame time of the first frame after the last retarget
    start_time_ms: Option<f64>,
    running: bool,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, spec: AnimationSpec<T>) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            start_velocity: Vec::new(),
            velocity: Vec::new(),
            spec,
            start_time_ms: None,
            running: false,
        }
    }

    /// Start animating to a new target value.
    ///
    /// The clock restarts on the next call to [`advance`](Self::advance).
    pub fn animate_to(&mut self, new_target: T) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        log::debug!(
            "retarget {:?} -> {:?} from {:?}",
            self.target,
            new_target,
            self.current
        );
        self.start = self.current.clone();
        self.start_velocity = self.velocity.clone();
        self.target = new_target;
        self.start_time_ms = None;
        self.running = true;
    }

    /// Replace the spec used by the next retarget. A running animation keeps
    /// its start and target and continues under the new spec.
    pub fn set_spec(&mut self, spec: AnimationSpec<T>) {
        self.spec = spec;
    }

    /// Advance to `frame_time_ms` on the frame clock.
    pub fn advance(&mut self, frame_time_ms: f64) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }
        let start_time = *self.start_time_ms.get_or_insert(frame_time_ms);
        self.advance_to_play_time((frame_time_ms - start_time).max(0.0) as f32)
    }

    /// Advance to an explicit play time, measured from the last retarget.
    /// Used when several animations share one clock.
    pub fn advance_to_play_time(&mut self, play_time_ms: f32) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        let sample = self.spec.sample_from(
            &self.start,
            &self.start_velocity,
            &self.target,
            play_time_ms,
        );
        self.velocity = sample.velocity;
        if sample.finished {
            self.running = false;
            self.start = self.target.clone();
            self.start_velocity.clear();
            self.start_time_ms = None;
        }

        if sample.value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = sample.value;
        AdvanceResult::Changed(self.current.clone())
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Get the value the running animation started from
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Per-channel velocity of the current value in units per second.
    /// Empty while at rest or under a tween.
    pub fn velocity(&self) -> &[f32] {
        &self.velocity
    }

    pub fn spec(&self) -> &AnimationSpec<T> {
        &self.spec
    }

    /// Set value immediately without animation
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.start_velocity.clear();
        self.velocity.clear();
        self.start_time_ms = None;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, TweenSpec, DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW};

    fn linear(duration_ms: f32) -> AnimationSpec<f32> {
        AnimationSpec::tween(duration_ms, Easing::LinearEasing)
    }

    #[test]
    fn test_animation_state_new() {
        let state = AnimationState::new(0.0f32, linear(300.0));

        assert_eq!(*state.current(), 0.0);
        assert_eq!(*state.target(), 0.0);
        assert!(!state.is_animating()); // Starts at rest
    }

    #[test]
    fn test_animation_state_animate_to() {
        let mut state = AnimationState::new(0.0f32, linear(300.0));

        state.animate_to(100.0);

        assert_eq!(*state.target(), 100.0);
        assert!(state.is_animating());
    }

    #[test]
    fn test_clock_starts_on_first_frame() {
        let mut state = AnimationState::new(0.0f32, linear(1000.0));
        state.animate_to(100.0);

        // First frame pins the start time, so nothing moves yet
        assert_eq!(state.advance(5000.0), AdvanceResult::NoChange);
        assert_eq!(state.advance(5500.0), AdvanceResult::Changed(50.0));
        assert_eq!(state.advance(6000.0), AdvanceResult::Changed(100.0));
        assert!(!state.is_animating());
        assert_eq!(state.advance(6016.0), AdvanceResult::NoChange);
    }

    #[test]
    fn test_animate_to_same_target_does_not_restart() {
        let mut state = AnimationState::new(0.0f32, linear(1000.0));
        state.animate_to(100.0);
        state.advance(0.0);
        state.advance(400.0);

        state.animate_to(100.0);
        assert_eq!(state.advance(500.0), AdvanceResult::Changed(50.0));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut state = AnimationState::new(0.0f32, linear(1000.0));
        state.animate_to(100.0);
        state.advance(0.0);
        state.advance(250.0);
        let observed = *state.current();
        assert!((observed - 25.0).abs() < 1e-4);

        state.animate_to(0.0);
        assert_eq!(*state.start(), observed);
        // Sampling right after the retarget gives the same value, no jump
        assert_eq!(state.advance(250.0), AdvanceResult::NoChange);
        assert_eq!(*state.current(), observed);

        // Halfway through the new run: midway between 25 and 0
        state.advance(750.0);
        assert!((*state.current() - 12.5).abs() < 1e-4);
    }

    #[test]
    fn test_snap_to() {
        let mut state = AnimationState::new(0.0f32, linear(300.0));
        state.animate_to(100.0);
        state.snap_to(50.0);

        assert_eq!(*state.current(), 50.0);
        assert_eq!(*state.target(), 50.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_set_spec_applies_to_running_animation() {
        let mut state = AnimationState::new(0.0f32, linear(1000.0));
        state.animate_to(100.0);
        state.advance(0.0);
        state.set_spec(TweenSpec::linear(500.0).into());
        assert_eq!(state.advance(250.0), AdvanceResult::Changed(50.0));
    }

    #[test]
    fn test_reversed_spring_keeps_its_momentum() {
        let spec = AnimationSpec::spring(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW).unwrap();
        let mut state = AnimationState::new(0.0f32, spec);
        state.animate_to(341.0);
        state.advance(0.0);
        state.advance(96.0);
        let observed = *state.current();
        assert!(state.velocity()[0] > 0.0);

        state.animate_to(0.0);
        assert_eq!(state.advance(96.0), AdvanceResult::NoChange);
        state.advance(112.0);
        assert!(
            *state.current() > observed,
            "box reversed instantly: {} after {}",
            state.current(),
            observed
        );

        let mut settled = false;
        for frame in 8..400 {
            state.advance(frame as f64 * 16.0);
            if !state.is_animating() {
                settled = true;
                break;
            }
        }
        assert!(settled);
        assert_eq!(*state.current(), 0.0);
        assert!(state.velocity().is_empty());
    }
}
