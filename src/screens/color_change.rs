use crate::animate::animate_color_as_state;
use crate::animation::TweenSpec;
use crate::toggle::{BoxColor, ToggleState};
use crate::widgets::{button, color_box, column, Color, CrossAxisAlignment};

use super::Screen;

/// Square fading between red and magenta
pub fn color_change_screen() -> Screen {
    let color_state = ToggleState::new(BoxColor::Magenta);

    // Each state shows the other state's color
    let color = animate_color_as_state(
        color_state.signal(),
        |state| match state {
            BoxColor::Red => Color::MAGENTA,
            BoxColor::Magenta => Color::RED,
        },
        TweenSpec::new(4500.0),
        "color",
    );

    let root = column()
        .fill_max_width()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .child(
            color_box()
                .size(200.0)
                .padding(20.0)
                .background(color.value()),
        )
        .child(
            button("Change Color")
                .padding(10.0)
                .on_click(move || color_state.flip()),
        );

    Screen::new("color", root).animation(color)
}
