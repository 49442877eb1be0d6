use crate::animate::animate_dp_as_state;
use crate::animation::{Easing, KeyframesSpec};
use crate::error::Result;
use crate::platform::DisplayMetrics;
use crate::toggle::{BoxPosition, ToggleState};
use crate::widgets::Color;

use super::{moving_box, Screen, BOX_SIDE};

/// Box following a scripted path of intermediate offsets.
///
/// The same keyframes apply in both directions.
pub fn keyframe_screen(metrics: &DisplayMetrics) -> Result<Screen> {
    let box_state = ToggleState::new(BoxPosition::Start);
    let end = metrics.end_offset(BOX_SIDE);

    let path = KeyframesSpec::<f32>::builder(1000.0)
        .at(100.0, 10.0)
        .with(Easing::LinearEasing)
        .at(110.0, 500.0)
        .with(Easing::FastOutSlowInEasing)
        .at(200.0, 700.0)
        .with(Easing::LinearOutSlowInEasing)
        .build()?;

    let offset = animate_dp_as_state(
        box_state.signal(),
        move |position| match position {
            BoxPosition::Start => 0.0,
            BoxPosition::End => end,
        },
        path,
        "offset",
    );

    let root = moving_box(offset.value(), Color::RED, "Move Box", move || {
        box_state.flip()
    });
    Ok(Screen::new("keyframe", root).animation(offset))
}
