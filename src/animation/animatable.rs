use crate::widgets::Color;

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + std::fmt::Debug + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;

    /// Components a spring moves independently
    fn to_channels(&self) -> Vec<f32>;

    /// Rebuild a value from [`to_channels`](Self::to_channels) output
    fn from_channels(channels: &[f32]) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }

    fn to_channels(&self) -> Vec<f32> {
        vec![*self]
    }

    fn from_channels(channels: &[f32]) -> Self {
        channels.first().copied().unwrap_or_default()
    }
}

/// Component-wise blend of the stored RGBA channels.
///
/// Spring overshoot can push channels outside [0, 1]; they are clamped so the
/// result is always a displayable color.
impl Animatable for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color {
            r: (from.r + (to.r - from.r) * t).clamp(0.0, 1.0),
            g: (from.g + (to.g - from.g) * t).clamp(0.0, 1.0),
            b: (from.b + (to.b - from.b) * t).clamp(0.0, 1.0),
            a: (from.a + (to.a - from.a) * t).clamp(0.0, 1.0),
        }
    }

    fn to_channels(&self) -> Vec<f32> {
        vec![self.r, self.g, self.b, self.a]
    }

    fn from_channels(channels: &[f32]) -> Self {
        let channel = |i: usize| channels.get(i).copied().unwrap_or(0.0).clamp(0.0, 1.0);
        Color::rgba(channel(0), channel(1), channel(2), channel(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(f32::lerp(&0.0, &10.0, 0.0), 0.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 0.5), 5.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 1.0), 10.0);
        // Overshoot
        assert_eq!(f32::lerp(&0.0, &10.0, 1.5), 15.0);
    }

    #[test]
    fn test_color_lerp() {
        let mid = Color::lerp(&Color::RED, &Color::MAGENTA, 0.5);
        assert_eq!(mid.r, 1.0);
        assert_eq!(mid.g, 0.0);
        assert_eq!(mid.b, 0.5);
        assert_eq!(mid.a, 1.0);
    }

    #[test]
    fn test_color_channels_clamp_on_rebuild() {
        assert_eq!(
            Color::from_channels(&Color::MAGENTA.to_channels()),
            Color::MAGENTA
        );
        let over = Color::from_channels(&[1.2, -0.1, 0.5, 1.0]);
        assert_eq!(over, Color::rgba(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_color_lerp_clamps_overshoot() {
        let over = Color::lerp(&Color::RED, &Color::MAGENTA, 1.4);
        assert_eq!(over.b, 1.0);
        let under = Color::lerp(&Color::RED, &Color::MAGENTA, -0.3);
        assert_eq!(under.b, 0.0);
    }
}
