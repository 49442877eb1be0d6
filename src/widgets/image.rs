use crate::layout::{Constraints, Size};
use crate::reactive::{IntoMaybeDyn, MaybeDyn};
use crate::renderer::PaintContext;

use super::widget::{Rect, Widget};

/// Square bitmap referenced by asset name, optionally rotated.
pub struct Image {
    asset: String,
    content_description: String,
    size: f32,
    padding: f32,
    /// Clockwise rotation in degrees about the center
    rotation: MaybeDyn<f32>,
    bounds: Rect,
}

pub fn image(asset: impl Into<String>) -> Image {
    Image {
        asset: asset.into(),
        content_description: String::new(),
        size: 0.0,
        padding: 0.0,
        rotation: MaybeDyn::Static(0.0),
        bounds: Rect::default(),
    }
}

impl Image {
    pub fn content_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = description.into();
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn rotate(mut self, degrees: impl IntoMaybeDyn<f32>) -> Self {
        self.rotation = degrees.into_maybe_dyn();
        self
    }
}

impl Widget for Image {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let side = self.size + self.padding * 2.0;
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
        ctx.draw_image(
            &self.asset,
            &self.content_description,
            self.bounds.inset(self.padding),
            self.rotation.get(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::create_signal;
    use crate::renderer::DrawCommand;

    #[test]
    fn test_paints_rotation() {
        let angle = create_signal(0.0_f32);
        let mut widget = image("propeller")
            .content_description("fan")
            .size(300.0)
            .padding(10.0)
            .rotate(angle.read_only());
        assert_eq!(
            widget.layout(Constraints::loose(Size::new(411.0, 891.0))),
            Size::new(320.0, 320.0)
        );
        widget.set_origin(45.5, 0.0);

        angle.set(90.0);
        let mut ctx = PaintContext::new();
        widget.paint(&mut ctx);
        assert_eq!(
            ctx.commands(),
            &[DrawCommand::Image {
                asset: "propeller".into(),
                description: "fan".into(),
                rect: Rect::new(55.5, 10.0, 300.0, 300.0),
                rotation_degrees: 90.0,
            }]
        );
    }
}
