use crate::layout::{Constraints, Size};
use crate::reactive::{IntoMaybeDyn, MaybeDyn};
use crate::renderer::PaintContext;

use super::widget::{Color, Rect, Widget};

/// Solid square of color.
///
/// The offset moves the painted box without affecting layout, so siblings
/// stay put while the box slides.
pub struct ColorBox {
    size: MaybeDyn<f32>,
    padding: f32,
    color: MaybeDyn<Color>,
    offset_x: MaybeDyn<f32>,
    offset_y: MaybeDyn<f32>,
    bounds: Rect,
}

pub fn color_box() -> ColorBox {
    ColorBox {
        size: MaybeDyn::Static(0.0),
        padding: 0.0,
        color: MaybeDyn::Static(Color::TRANSPARENT),
        offset_x: MaybeDyn::Static(0.0),
        offset_y: MaybeDyn::Static(0.0),
        bounds: Rect::default(),
    }
}

impl ColorBox {
    /// Side length of the square
    pub fn size(mut self, size: impl IntoMaybeDyn<f32>) -> Self {
        self.size = size.into_maybe_dyn();
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, color: impl IntoMaybeDyn<Color>) -> Self {
        self.color = color.into_maybe_dyn();
        self
    }

    /// Paint-time translation in x and y
    pub fn offset(mut self, x: impl IntoMaybeDyn<f32>, y: impl IntoMaybeDyn<f32>) -> Self {
        self.offset_x = x.into_maybe_dyn();
        self.offset_y = y.into_maybe_dyn();
        self
    }
}

impl Widget for ColorBox {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let side = self.size.get() + self.padding * 2.0;
        let size = constraints.constrain(Size::new(side, side));
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let rect = self
            .bounds
            .inset(self.padding)
            .offset(self.offset_x.get(), self.offset_y.get());
        ctx.draw_rect(rect, self.color.get());
    }
}
