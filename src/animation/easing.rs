//! Easing curves for timed animations.
//!
//! An easing maps the normalized elapsed time of an animation (0.0 to 1.0)
//! to a progress fraction, which is then used to interpolate between the
//! start and target values.
//!
//! ## Built-in Easing Functions
//!
//! - [`Easing::LinearEasing`] - Constant speed (no easing)
//! - [`Easing::FastOutSlowInEasing`] - Standard ease-in-out curve, the default
//! - [`Easing::LinearOutSlowInEasing`] - Enters at full speed, decelerates
//! - [`Easing::FastOutLinearInEasing`] - Accelerates, leaves at full speed
//! - [`Easing::EaseIn`], [`Easing::EaseOut`], [`Easing::EaseInOut`] - CSS curves
//! - [`Easing::CubicBezier`] - Arbitrary cubic bezier curve
//!
//! ## Example
//!
//! ```
//! use animate_state::animation::{Easing, TweenSpec};
//!
//! // A full turn should not slow down near the end, so pick linear easing.
//! let spin = TweenSpec::new(2500.0).easing(Easing::LinearEasing);
//! assert_eq!(spin.easing.transform(0.5), 0.5);
//! ```

/// Easing curve applied to the normalized time of a tween or keyframe segment
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (constant speed)
    LinearEasing,
    /// Starts slow, speeds up, then slows down: cubic-bezier(0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowInEasing,
    /// Enters at peak velocity and decelerates: cubic-bezier(0.0, 0.0, 0.2, 1.0)
    LinearOutSlowInEasing,
    /// Accelerates and leaves at peak velocity: cubic-bezier(0.4, 0.0, 1.0, 1.0)
    FastOutLinearInEasing,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Slow start and end, fast middle
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map a linear fraction in [0, 1] to eased progress.
    /// Input outside [0, 1] is clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::LinearEasing => fraction,
            Easing::FastOutSlowInEasing => cubic_bezier(fraction, 0.4, 0.0, 0.2, 1.0),
            Easing::LinearOutSlowInEasing => cubic_bezier(fraction, 0.0, 0.0, 0.2, 1.0),
            Easing::FastOutLinearInEasing => cubic_bezier(fraction, 0.4, 0.0, 1.0, 1.0),
            Easing::EaseIn => cubic_bezier(fraction, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => cubic_bezier(fraction, 0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => cubic_bezier(fraction, 0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(fraction, x1, y1, x2, y2),
        }
    }
}

/// Cubic bezier curve evaluation.
/// Assumes x1 and x2 are in [0, 1] so x(t) is monotonic.
fn cubic_bezier(fraction: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson to solve x(t) = fraction
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = cubic_bezier_coord(t, x1, x2) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let slope = cubic_bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - x / slope).clamp(0.0, 1.0);
    }

    if !converged {
        // Bisection fallback for flat regions of the curve
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..24 {
            let delta = cubic_bezier_coord(t, x1, x2) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    cubic_bezier_coord(t, y1, y2)
}

fn cubic_bezier_coord(t: f32, p1: f32, p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

fn cubic_bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
