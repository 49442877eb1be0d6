use thiserror::Error;

/// Errors raised while building animation specs or selecting a screen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("keyframe at {time_ms}ms lies outside the animation duration of {duration_ms}ms")]
    KeyframeOutOfRange { time_ms: f32, duration_ms: f32 },

    #[error("animation duration must be finite and non-negative, got {0}ms")]
    InvalidDuration(f32),

    #[error("invalid spring: damping ratio {damping_ratio}, stiffness {stiffness}")]
    InvalidSpring { damping_ratio: f32, stiffness: f32 },

    #[error("unknown screen `{0}`")]
    UnknownScreen(String),
}

pub type Result<T> = std::result::Result<T, Error>;
