//! Keyframes pin intermediate values of an animation at fixed times.
//!
//! The animation still runs from its start value to its target value over
//! `duration_ms`; keyframes add control points in between. Each segment is
//! shaped by the easing attached to the keyframe it starts from.
//!
//! # Example
//!
//! ```
//! use animate_state::animation::{Easing, KeyframesSpec};
//!
//! let spec = KeyframesSpec::<f32>::builder(1000.0)
//!     .at(100.0, 10.0)
//!     .with(Easing::LinearEasing)
//!     .at(110.0, 500.0)
//!     .with(Easing::FastOutSlowInEasing)
//!     .at(200.0, 700.0)
//!     .with(Easing::LinearOutSlowInEasing)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(spec.sample_value(&0.0, &300.0, 500.0), 110.0);
//! ```

use super::{Animatable, Easing};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub value: T,
    pub time_ms: f32,
    /// Easing for the segment that starts at this keyframe
    pub easing: Easing,
}

/// Keyframe-based animation over a fixed duration
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframesSpec<T> {
    pub duration_ms: f32,
    pub delay_ms: f32,
    /// Sorted by time, times unique and within `[0, duration_ms]`
    keyframes: Vec<Keyframe<T>>,
}

impl<T: Animatable> KeyframesSpec<T> {
    pub fn builder(duration_ms: f32) -> KeyframesBuilder<T> {
        KeyframesBuilder {
            duration_ms,
            delay_ms: 0.0,
            keyframes: Vec::new(),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    /// Value the animation rests at once it has finished: the keyframe
    /// declared at `duration_ms` if there is one, otherwise `target`.
    pub fn end_value<'a>(&'a self, target: &'a T) -> &'a T {
        match self.keyframes.last() {
            Some(last) if last.time_ms >= self.duration_ms => &last.value,
            _ => target,
        }
    }

    /// Value at `play_time_ms` (time since the delay ended).
    /// Play time is clamped to `[0, duration_ms]`.
    pub fn sample_value(&self, start: &T, target: &T, play_time_ms: f32) -> T {
        let time = play_time_ms.clamp(0.0, self.duration_ms);
        if time >= self.duration_ms {
            return self.end_value(target).clone();
        }

        // Implicit keyframes: the start value at 0 and the end value at
        // `duration_ms`. An explicit keyframe at 0 replaces the start value.
        let mut from_time = 0.0;
        let mut from_value = start;
        let mut from_easing = Easing::LinearEasing;

        for frame in &self.keyframes {
            if frame.time_ms <= time {
                from_time = frame.time_ms;
                from_value = &frame.value;
                from_easing = frame.easing;
                continue;
            }
            return segment(from_value, &frame.value, from_time, frame.time_ms, from_easing, time);
        }

        segment(
            from_value,
            self.end_value(target),
            from_time,
            self.duration_ms,
            from_easing,
            time,
        )
    }
}

fn segment<T: Animatable>(
    from: &T,
    to: &T,
    from_time: f32,
    to_time: f32,
    easing: Easing,
    time: f32,
) -> T {
    let span = to_time - from_time;
    if span <= 0.0 {
        return to.clone();
    }
    let fraction = (time - from_time) / span;
    T::lerp(from, to, easing.transform(fraction))
}

/// Builder collecting keyframes before validation
pub struct KeyframesBuilder<T> {
    duration_ms: f32,
    delay_ms: f32,
    keyframes: Vec<Keyframe<T>>,
}

impl<T: Animatable> KeyframesBuilder<T> {
    /// Pin `value` at `time_ms` with linear easing into the next segment
    pub fn at(mut self, value: T, time_ms: f32) -> Self {
        self.keyframes.push(Keyframe {
            value,
            time_ms,
            easing: Easing::LinearEasing,
        });
        self
    }

    /// Set the easing of the most recently added keyframe
    pub fn with(mut self, easing: Easing) -> Self {
        if let Some(last) = self.keyframes.last_mut() {
            last.easing = easing;
        }
        self
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Validate and sort the keyframes.
    ///
    /// Keyframes outside `[0, duration_ms]` are rejected. When two keyframes
    /// share a time the later one wins.
    pub fn build(self) -> Result<KeyframesSpec<T>> {
        validate_duration(self.duration_ms)?;
        validate_duration(self.delay_ms)?;

        let mut keyframes: Vec<Keyframe<T>> = Vec::with_capacity(self.keyframes.len());
        for frame in self.keyframes {
            if !(0.0..=self.duration_ms).contains(&frame.time_ms) {
                return Err(Error::KeyframeOutOfRange {
                    time_ms: frame.time_ms,
                    duration_ms: self.duration_ms,
                });
            }
            match keyframes.iter_mut().find(|k| k.time_ms == frame.time_ms) {
                Some(existing) => *existing = frame,
                None => keyframes.push(frame),
            }
        }
        keyframes.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));

        Ok(KeyframesSpec {
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            keyframes,
        })
    }
}

pub(crate) fn validate_duration(duration_ms: f32) -> Result<()> {
    if duration_ms.is_finite() && duration_ms >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDuration(duration_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationSpec;

    fn demo_spec() -> KeyframesSpec<f32> {
        KeyframesSpec::builder(1000.0)
            .at(100.0, 10.0)
            .with(Easing::LinearEasing)
            .at(110.0, 500.0)
            .with(Easing::FastOutSlowInEasing)
            .at(200.0, 700.0)
            .with(Easing::LinearOutSlowInEasing)
            .build()
            .unwrap()
    }

    #[test]
    fn test_hits_declared_values() {
        let spec = demo_spec();
        assert_eq!(spec.sample_value(&0.0, &341.0, 0.0), 0.0);
        assert_eq!(spec.sample_value(&0.0, &341.0, 10.0), 100.0);
        assert_eq!(spec.sample_value(&0.0, &341.0, 500.0), 110.0);
        assert_eq!(spec.sample_value(&0.0, &341.0, 700.0), 200.0);
        assert_eq!(spec.sample_value(&0.0, &341.0, 1000.0), 341.0);
    }

    #[test]
    fn test_values_between_points_stay_within_neighbours() {
        let spec = demo_spec();
        let bounds = [
            (0.0, 10.0, 0.0, 100.0),
            (10.0, 500.0, 100.0, 110.0),
            (500.0, 700.0, 110.0, 200.0),
            (700.0, 1000.0, 200.0, 341.0),
        ];
        for (t0, t1, lo, hi) in bounds {
            for step in 1..20 {
                let time = t0 + (t1 - t0) * step as f32 / 20.0;
                let value = spec.sample_value(&0.0, &341.0, time);
                assert!(
                    value >= lo - 1e-3 && value <= hi + 1e-3,
                    "value {} at {}ms outside [{}, {}]",
                    value,
                    time,
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn test_linear_segment_midpoint() {
        let spec = demo_spec();
        let value = spec.sample_value(&0.0, &341.0, 255.0);
        assert!((value - 105.0).abs() < 1e-3);
    }

    #[test]
    fn test_play_time_is_clamped() {
        let spec = demo_spec();
        assert_eq!(spec.sample_value(&0.0, &341.0, -50.0), 0.0);
        assert_eq!(spec.sample_value(&0.0, &341.0, 5000.0), 341.0);
    }

    #[test]
    fn test_keyframe_at_zero_replaces_start() {
        let spec = KeyframesSpec::<f32>::builder(100.0).at(50.0, 0.0).build().unwrap();
        assert_eq!(spec.sample_value(&0.0, &100.0, 0.0), 50.0);
        assert_eq!(spec.sample_value(&0.0, &100.0, 50.0), 75.0);
    }

    #[test]
    fn test_keyframe_at_duration_is_the_final_value() {
        let spec = KeyframesSpec::<f32>::builder(100.0).at(50.0, 100.0).build().unwrap();
        assert_eq!(spec.sample_value(&0.0, &200.0, 50.0), 25.0);
        assert_eq!(spec.sample_value(&0.0, &200.0, 99.0), 49.5);
        assert_eq!(spec.sample_value(&0.0, &200.0, 100.0), 50.0);
        assert_eq!(spec.end_value(&200.0), &50.0);
        assert_eq!(demo_spec().end_value(&341.0), &341.0);

        let sample = AnimationSpec::from(spec).sample(&0.0, &200.0, 100.0);
        assert_eq!(sample.value, 50.0);
        assert!(sample.finished);
    }

    #[test]
    fn test_out_of_range_keyframe_rejected() {
        let result = KeyframesSpec::builder(1000.0).at(1.0_f32, 1200.0).build();
        assert_eq!(
            result.unwrap_err(),
            Error::KeyframeOutOfRange {
                time_ms: 1200.0,
                duration_ms: 1000.0
            }
        );
        assert!(KeyframesSpec::builder(1000.0).at(1.0_f32, -1.0).build().is_err());
    }

    #[test]
    fn test_keyframes_sorted_and_deduplicated() {
        let spec = KeyframesSpec::builder(1000.0)
            .at(3.0_f32, 700.0)
            .at(1.0, 100.0)
            .at(2.0, 100.0)
            .build()
            .unwrap();
        let times: Vec<f32> = spec.keyframes().iter().map(|k| k.time_ms).collect();
        assert_eq!(times, vec![100.0, 700.0]);
        assert_eq!(spec.keyframes()[0].value, 2.0);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        assert_eq!(
            KeyframesSpec::<f32>::builder(-1.0).build().unwrap_err(),
            Error::InvalidDuration(-1.0)
        );
    }
}
