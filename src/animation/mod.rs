mod animatable;
mod easing;
mod keyframes;
mod spring;
mod state;
mod transition;

pub use animatable::Animatable;
pub use easing::Easing;
pub use keyframes::{Keyframe, KeyframesBuilder, KeyframesSpec};
pub use spring::{
    SpringSpec, SpringState, DAMPING_RATIO_HIGH_BOUNCY, DAMPING_RATIO_LOW_BOUNCY,
    DAMPING_RATIO_MEDIUM_BOUNCY, DAMPING_RATIO_NO_BOUNCY, STIFFNESS_HIGH, STIFFNESS_LOW,
    STIFFNESS_MEDIUM, STIFFNESS_MEDIUM_LOW, STIFFNESS_VERY_LOW,
};
pub use state::{AdvanceResult, AnimationState};
pub use transition::{update_transition, Segment, Transition};

use crate::error::Result;
use keyframes::validate_duration;

/// Something the frame driver advances once per frame.
pub trait Animated {
    /// Move to `frame_time_ms` on the frame clock. Returns true while the
    /// animation still needs frames.
    fn advance(&mut self, frame_time_ms: f64) -> bool;
}

/// Duration-based animation shaped by an easing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    pub easing: Easing,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl TweenSpec {
    /// Tween with the default ease-in-out curve
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            easing: Easing::default(),
            delay_ms: 0.0,
        }
    }

    /// Tween with constant speed
    pub fn linear(duration_ms: f32) -> Self {
        Self::new(duration_ms).easing(Easing::LinearEasing)
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Reject negative or non-finite timings
    pub fn validate(self) -> Result<Self> {
        validate_duration(self.duration_ms)?;
        validate_duration(self.delay_ms)?;
        Ok(self)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(300.0)
    }
}

/// How a value travels from its start to its target
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationSpec<T> {
    Tween(TweenSpec),
    Spring(SpringSpec),
    Keyframes(KeyframesSpec<T>),
}

/// Value of an animation at one point in time
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<T> {
    pub value: T,
    /// Per-channel speed in units per second. Empty when the animation
    /// carries no momentum: tweens, keyframes and finished springs.
    pub velocity: Vec<f32>,
    /// The animation has reached its target and will not change further
    pub finished: bool,
}

impl<T> Sample<T> {
    fn at_rest(value: T, finished: bool) -> Self {
        Self {
            value,
            velocity: Vec::new(),
            finished,
        }
    }
}

impl<T: Animatable> AnimationSpec<T> {
    pub fn tween(duration_ms: f32, easing: Easing) -> Self {
        AnimationSpec::Tween(TweenSpec::new(duration_ms).easing(easing))
    }

    pub fn spring(damping_ratio: f32, stiffness: f32) -> Result<Self> {
        Ok(AnimationSpec::Spring(SpringSpec::new(damping_ratio, stiffness)?))
    }

    /// Total running time including delay. `None` for springs, which settle
    /// asymptotically.
    pub fn duration_ms(&self) -> Option<f32> {
        match self {
            AnimationSpec::Tween(tween) => Some(tween.delay_ms + tween.duration_ms),
            AnimationSpec::Spring(_) => None,
            AnimationSpec::Keyframes(keyframes) => {
                Some(keyframes.delay_ms + keyframes.duration_ms)
            }
        }
    }

    /// Evaluate the animation `elapsed_ms` after it started from `start`
    /// at rest.
    pub fn sample(&self, start: &T, target: &T, elapsed_ms: f32) -> Sample<T> {
        self.sample_from(start, &[], target, elapsed_ms)
    }

    /// Like [`sample`](Self::sample), for an animation that left `start`
    /// moving at `start_velocity` (per channel, units per second). Springs
    /// keep that momentum; tweens and keyframes start from rest.
    pub fn sample_from(
        &self,
        start: &T,
        start_velocity: &[f32],
        target: &T,
        elapsed_ms: f32,
    ) -> Sample<T> {
        match self {
            AnimationSpec::Tween(tween) => {
                let play_time = elapsed_ms - tween.delay_ms;
                if play_time <= 0.0 && tween.duration_ms > 0.0 {
                    return Sample::at_rest(start.clone(), false);
                }
                if play_time >= tween.duration_ms {
                    return Sample::at_rest(target.clone(), true);
                }
                let fraction = play_time / tween.duration_ms;
                Sample::at_rest(
                    T::lerp(start, target, tween.easing.transform(fraction)),
                    false,
                )
            }
            AnimationSpec::Spring(spring) => {
                sample_spring(spring, start, start_velocity, target, elapsed_ms)
            }
            AnimationSpec::Keyframes(keyframes) => {
                let play_time = elapsed_ms - keyframes.delay_ms;
                if play_time >= keyframes.duration_ms {
                    return Sample::at_rest(keyframes.end_value(target).clone(), true);
                }
                Sample::at_rest(keyframes.sample_value(start, target, play_time), false)
            }
        }
    }
}

/// Every channel runs its own spring towards the matching target channel.
/// The settle threshold scales with the channel's span, so a 341dp move and
/// a color channel settle at the same visual precision.
fn sample_spring<T: Animatable>(
    spring: &SpringSpec,
    start: &T,
    start_velocity: &[f32],
    target: &T,
    elapsed_ms: f32,
) -> Sample<T> {
    let elapsed_secs = elapsed_ms.max(0.0) / 1000.0;
    let to = target.to_channels();

    let mut channels = Vec::with_capacity(to.len());
    let mut velocity = Vec::with_capacity(to.len());
    let mut settled = true;
    for (i, (from, to)) in start.to_channels().into_iter().zip(to).enumerate() {
        let initial = SpringState {
            displacement: from - to,
            velocity: start_velocity.get(i).copied().unwrap_or(0.0),
        };
        let state = spring.evaluate(initial, elapsed_secs);
        let threshold = spring.visibility_threshold * (from - to).abs().max(1.0);
        settled &= state.is_settled(threshold);
        channels.push(to + state.displacement);
        velocity.push(state.velocity);
    }

    if settled {
        Sample::at_rest(target.clone(), true)
    } else {
        Sample {
            value: T::from_channels(&channels),
            velocity,
            finished: false,
        }
    }
}

impl<T> Default for AnimationSpec<T> {
    fn default() -> Self {
        AnimationSpec::Tween(TweenSpec::default())
    }
}

impl<T> From<TweenSpec> for AnimationSpec<T> {
    fn from(spec: TweenSpec) -> Self {
        AnimationSpec::Tween(spec)
    }
}

impl<T> From<SpringSpec> for AnimationSpec<T> {
    fn from(spec: SpringSpec) -> Self {
        AnimationSpec::Spring(spec)
    }
}

impl<T> From<KeyframesSpec<T>> for AnimationSpec<T> {
    fn from(spec: KeyframesSpec<T>) -> Self {
        AnimationSpec::Keyframes(spec)
    }
}

/// Interpolated value `elapsed_ms` into an animation from `start` to `target`.
pub fn interpolate<T: Animatable>(
    start: &T,
    target: &T,
    elapsed_ms: f32,
    spec: &AnimationSpec<T>,
) -> T {
    spec.sample(start, target, elapsed_ms).value
}
