use crate::animate::animate_dp_as_state;
use crate::animation::{AnimationSpec, DAMPING_RATIO_HIGH_BOUNCY, STIFFNESS_VERY_LOW};
use crate::error::Result;
use crate::platform::DisplayMetrics;
use crate::toggle::{BoxPosition, ToggleState};
use crate::widgets::Color;

use super::{moving_box, Screen, BOX_SIDE};

/// Box bouncing past its target before it settles
pub fn spring_screen(metrics: &DisplayMetrics) -> Result<Screen> {
    let box_state = ToggleState::new(BoxPosition::Start);
    let end = metrics.end_offset(BOX_SIDE);

    let offset = animate_dp_as_state(
        box_state.signal(),
        move |position| match position {
            BoxPosition::Start => 0.0,
            BoxPosition::End => end,
        },
        AnimationSpec::spring(DAMPING_RATIO_HIGH_BOUNCY, STIFFNESS_VERY_LOW)?,
        "offset",
    );

    let root = moving_box(offset.value(), Color::RED, "Move Box", move || {
        box_state.flip()
    });
    Ok(Screen::new("spring", root).animation(offset))
}
