use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

/// RGBA color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Input events dispatched to widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer pressed
    MouseDown { x: f32, y: f32 },
    /// Pointer released
    MouseUp { x: f32, y: f32 },
    /// Mouse/pointer left the surface
    MouseLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

pub trait Widget {
    /// Advance animations for this widget and children.
    /// Returns true if any animations are still active and need another frame.
    /// Called once per frame before layout.
    fn advance_animations(&mut self, frame_time_ms: f64) -> bool {
        let _ = frame_time_ms;
        false
    }

    fn layout(&mut self, constraints: Constraints) -> Size;
    fn set_origin(&mut self, x: f32, y: f32);
    fn bounds(&self) -> Rect;
    fn paint(&self, ctx: &mut PaintContext);

    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }
}

impl Widget for Box<dyn Widget> {
    fn advance_animations(&mut self, frame_time_ms: f64) -> bool {
        (**self).advance_animations(frame_time_ms)
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        (**self).layout(constraints)
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        (**self).set_origin(x, y)
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 40.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(109.0, 49.0));
        assert!(!rect.contains(110.0, 20.0));
        assert!(!rect.contains(50.0, 5.0));
    }

    #[test]
    fn test_rect_inset_and_center() {
        let rect = Rect::new(0.0, 0.0, 320.0, 320.0).inset(10.0);
        assert_eq!(rect, Rect::new(10.0, 10.0, 300.0, 300.0));
        assert_eq!(rect.center(), (160.0, 160.0));
    }
}
