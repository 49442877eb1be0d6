use crate::error::{Error, Result};

/// Very bouncy: large overshoot and several visible oscillations
pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
/// Critically damped: fastest approach without overshoot
pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

pub const STIFFNESS_HIGH: f32 = 10_000.0;
pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
pub const STIFFNESS_LOW: f32 = 200.0;
/// Slow, lazy motion
pub const STIFFNESS_VERY_LOW: f32 = 50.0;

/// Configuration for spring physics animation.
///
/// The spring has unit mass and is described by its damping ratio and
/// stiffness rather than a duration, so it settles asymptotically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = bouncy, > 1.0 = overdamped
    pub damping_ratio: f32,
    /// Spring constant (default: 1500.0)
    pub stiffness: f32,
    /// Distance and speed, as fractions of the animated span, below which
    /// the spring counts as settled
    pub visibility_threshold: f32,
}

impl SpringSpec {
    pub const DEFAULT: Self = Self {
        damping_ratio: DAMPING_RATIO_NO_BOUNCY,
        stiffness: STIFFNESS_MEDIUM,
        visibility_threshold: 0.001,
    };

    /// Create a spring, rejecting non-positive stiffness and negative damping.
    pub fn new(damping_ratio: f32, stiffness: f32) -> Result<Self> {
        if !(stiffness > 0.0 && stiffness.is_finite())
            || !(damping_ratio >= 0.0 && damping_ratio.is_finite())
        {
            return Err(Error::InvalidSpring {
                damping_ratio,
                stiffness,
            });
        }
        Ok(Self {
            damping_ratio,
            stiffness,
            ..Self::DEFAULT
        })
    }

    /// Set the settle threshold
    pub fn visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    /// Evaluate the spring `elapsed_secs` after it was released in
    /// `initial`, with the target at displacement 0.
    ///
    /// Underdamped springs swing past the target before settling.
    pub fn evaluate(&self, initial: SpringState, elapsed_secs: f32) -> SpringState {
        let t = elapsed_secs.max(0.0);
        let omega = self.stiffness.sqrt();
        let zeta = self.damping_ratio;
        let x0 = initial.displacement;
        let v0 = initial.velocity;

        let (displacement, velocity) = if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / damped;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay
                * (-zeta * omega * (a * cos + b * sin) + damped * (b * cos - a * sin));
            (x, v)
        } else if zeta == 1.0 {
            let a = x0;
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (a + b * t) * decay;
            let v = (b - omega * (a + b * t)) * decay;
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        };

        SpringState {
            displacement,
            velocity,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Instantaneous motion of a spring relative to its target
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpringState {
    /// Distance from the target, negative before reaching it
    pub displacement: f32,
    /// Units per second
    pub velocity: f32,
}

impl SpringState {
    /// At rest `displacement` away from the target
    pub fn at_rest(displacement: f32) -> Self {
        Self {
            displacement,
            velocity: 0.0,
        }
    }

    /// Check if the spring has settled (near the target, velocity near zero)
    pub fn is_settled(&self, threshold: f32) -> bool {
        self.displacement.abs() < threshold && self.velocity.abs() < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn high_bouncy() -> SpringSpec {
        SpringSpec::new(DAMPING_RATIO_HIGH_BOUNCY, STIFFNESS_VERY_LOW).unwrap()
    }

    /// Progress from 0.0 at rest to 1.0 on the target
    fn progress(spec: &SpringSpec, elapsed_secs: f32) -> f32 {
        1.0 + spec
            .evaluate(SpringState::at_rest(-1.0), elapsed_secs)
            .displacement
    }

    #[test]
    fn test_spring_starts_at_rest() {
        let state = high_bouncy().evaluate(SpringState::at_rest(-1.0), 0.0);
        assert!((state.displacement + 1.0).abs() < 1e-6);
        assert!(state.velocity.abs() < 1e-6);
    }

    #[test]
    fn test_default_spring_reaches_target() {
        let spec = SpringSpec::DEFAULT;
        let state = spec.evaluate(SpringState::at_rest(-1.0), 1.0);
        assert!(
            state.is_settled(spec.visibility_threshold),
            "Spring should settle near target, got {:?}",
            state
        );
    }

    #[test]
    fn test_bouncy_spring_overshoots() {
        let spec = high_bouncy();
        let max_position = (0..300)
            .map(|i| progress(&spec, i as f32 / 60.0))
            .fold(f32::MIN, f32::max);
        assert!(
            max_position > 1.3,
            "Bouncy spring should overshoot, max was {}",
            max_position
        );
    }

    #[test]
    fn test_critically_damped_does_not_overshoot() {
        let spec = SpringSpec::new(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW).unwrap();
        for i in 0..300 {
            let position = progress(&spec, i as f32 / 60.0);
            assert!(position <= 1.0 + 1e-5, "overshot at frame {}", i);
        }
    }

    #[test]
    fn test_overdamped_approaches_monotonically() {
        let spec = SpringSpec::new(2.0, STIFFNESS_MEDIUM_LOW).unwrap();
        let mut prev = 0.0;
        for i in 1..300 {
            let position = progress(&spec, i as f32 / 60.0);
            assert!(position >= prev - 1e-6);
            assert!(position <= 1.0 + 1e-5);
            prev = position;
        }
    }

    #[test]
    fn test_high_bouncy_settles_slowly() {
        let spec = high_bouncy();
        let released = SpringState::at_rest(-1.0);
        assert!(!spec.evaluate(released, 1.0).is_settled(spec.visibility_threshold));
        assert!(spec.evaluate(released, 10.0).is_settled(spec.visibility_threshold));
    }

    #[test]
    fn test_initial_velocity_carries_past_the_target() {
        let spec = SpringSpec::new(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW).unwrap();
        let moving = SpringState {
            displacement: 0.0,
            velocity: 100.0,
        };
        let later = spec.evaluate(moving, 0.05);
        assert!(later.displacement > 0.0);
        assert!(later.velocity < moving.velocity);

        let initial = spec.evaluate(moving, 0.0);
        assert!(initial.displacement.abs() < 1e-6);
        assert!((initial.velocity - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_overdamped_keeps_initial_velocity() {
        let spec = SpringSpec::new(2.0, STIFFNESS_MEDIUM_LOW).unwrap();
        let initial = spec.evaluate(
            SpringState {
                displacement: -10.0,
                velocity: 40.0,
            },
            0.0,
        );
        assert!((initial.displacement + 10.0).abs() < 1e-4);
        assert!((initial.velocity - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_spring_rejected() {
        assert!(SpringSpec::new(0.5, 0.0).is_err());
        assert!(SpringSpec::new(-0.1, 100.0).is_err());
        assert!(SpringSpec::new(f32::NAN, 100.0).is_err());
    }
}
