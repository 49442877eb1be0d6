pub mod effect;
pub mod invalidation;
pub mod maybe_dyn;
pub mod runtime;
pub mod signal;

pub use effect::{create_effect, Effect};
pub use invalidation::{
    has_animations, request_animation_frame, request_frame, request_paint, take_frame_request,
    with_app_state, with_app_state_mut, AppState, ChangeFlags,
};
pub use maybe_dyn::{IntoMaybeDyn, MaybeDyn};
pub use signal::{create_signal, ReadSignal, Signal};
