use crate::animation::{update_transition, TweenSpec};
use crate::platform::DisplayMetrics;
use crate::toggle::{BoxPosition, ToggleState};
use crate::widgets::Color;

use super::{moving_box, Screen, BOX_SIDE};

/// Box changing color and position in one coordinated transition
pub fn transition_screen(metrics: &DisplayMetrics) -> Screen {
    let box_state = ToggleState::new(BoxPosition::Start);
    let end = metrics.end_offset(BOX_SIDE);

    let transition = update_transition(box_state.signal(), "Color and Motion");
    let color = transition.animate(
        |_| TweenSpec::new(4000.0).into(),
        |position| match position {
            BoxPosition::Start => Color::RED,
            BoxPosition::End => Color::MAGENTA,
        },
    );
    let offset = transition.animate(
        |_| TweenSpec::new(4000.0).into(),
        move |position| match position {
            BoxPosition::Start => 0.0,
            BoxPosition::End => end,
        },
    );

    let root = moving_box(offset, color, "Start Animation", move || {
        box_state.flip()
    });
    Screen::new("transition", root).animation(transition)
}
