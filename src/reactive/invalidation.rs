use std::cell::RefCell;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Layout recalculation needed (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Repaint needed (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Application state for tracking what needs updating
pub struct AppState {
    /// Global change flags
    pub change_flags: ChangeFlags,
    /// Whether animations are currently active
    pub has_animations: bool,
    /// Whether something asked for another frame
    pub frame_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            change_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            has_animations: false,
            frame_requested: true,
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.change_flags.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.change_flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn clear_layout_flag(&mut self) {
        self.change_flags.remove(ChangeFlags::NEEDS_LAYOUT);
    }

    pub fn clear_paint_flag(&mut self) {
        self.change_flags.remove(ChangeFlags::NEEDS_PAINT);
    }
}

thread_local! {
    static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

pub fn with_app_state<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    APP_STATE.with(|state| f(&state.borrow()))
}

pub fn with_app_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    APP_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Ask the driver to run another frame
pub fn request_frame() {
    with_app_state_mut(|state| state.frame_requested = true);
}

/// Consume the pending frame request
pub fn take_frame_request() -> bool {
    with_app_state_mut(|state| std::mem::take(&mut state.frame_requested))
}

/// Keep the frame loop alive while an animation is running
pub fn request_animation_frame() {
    with_app_state_mut(|state| {
        state.has_animations = true;
        state.frame_requested = true;
    });
}

pub fn clear_animation_flag() {
    with_app_state_mut(|state| state.has_animations = false);
}

pub fn has_animations() -> bool {
    with_app_state(|state| state.has_animations)
}

pub fn request_paint() {
    with_app_state_mut(|state| {
        state.change_flags |= ChangeFlags::NEEDS_PAINT;
        state.frame_requested = true;
    });
}

pub(crate) fn reset_invalidation() {
    with_app_state_mut(|state| *state = AppState::new());
}
