pub mod button;
pub mod color_box;
pub mod column;
pub mod image;
pub mod widget;

pub use button::{button, Button};
pub use color_box::{color_box, ColorBox};
pub use column::{column, spacer, Column, CrossAxisAlignment, Spacer};
pub use image::{image, Image};
pub use widget::{Color, Event, EventResponse, Rect, Widget};

use crate::reactive::{IntoMaybeDyn, MaybeDyn};

impl IntoMaybeDyn<Color> for Color {
    fn into_maybe_dyn(self) -> MaybeDyn<Color> {
        MaybeDyn::Static(self)
    }
}
