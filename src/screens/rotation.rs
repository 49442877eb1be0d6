use crate::animate::animate_float_as_state;
use crate::animation::{AnimationSpec, Easing};
use crate::toggle::ToggleState;
use crate::widgets::{button, column, image, CrossAxisAlignment};

use super::Screen;

/// Propeller spinning a full turn at constant speed
pub fn rotation_screen() -> Screen {
    let rotated = ToggleState::new(false);

    // Without linear easing the turn visibly slows down near 360 degrees
    let angle = animate_float_as_state(
        rotated.signal(),
        |rotated| if *rotated { 360.0 } else { 0.0 },
        AnimationSpec::tween(2500.0, Easing::LinearEasing),
        "rotation",
    );

    let root = column()
        .fill_max_width()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .child(
            image("propeller")
                .content_description("fan")
                .size(300.0)
                .padding(10.0)
                .rotate(angle.value()),
        )
        .child(
            button("Rotate Propeller")
                .padding(10.0)
                .on_click(move || rotated.flip()),
        );

    Screen::new("rotation", root).animation(angle)
}
