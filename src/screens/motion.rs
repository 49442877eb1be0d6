use crate::animate::animate_dp_as_state;
use crate::animation::TweenSpec;
use crate::platform::DisplayMetrics;
use crate::toggle::{BoxPosition, ToggleState};
use crate::widgets::Color;

use super::{moving_box, Screen, BOX_SIDE};

/// Box sliding to the right edge and back
pub fn motion_screen(metrics: &DisplayMetrics) -> Screen {
    let box_state = ToggleState::new(BoxPosition::Start);
    let end = metrics.end_offset(BOX_SIDE);

    let offset = animate_dp_as_state(
        box_state.signal(),
        move |position| match position {
            BoxPosition::Start => 0.0,
            BoxPosition::End => end,
        },
        TweenSpec::new(500.0),
        "offset",
    );

    let root = moving_box(offset.value(), Color::RED, "Move Box", move || {
        box_state.flip()
    });
    Screen::new("motion", root).animation(offset)
}
