use std::rc::Rc;

use crate::layout::{Constraints, Size};
use crate::reactive::request_paint;
use crate::renderer::PaintContext;

use super::widget::{Event, EventResponse, Rect, Widget};

// Material filled button metrics
const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_HORIZONTAL_PADDING: f32 = 24.0;
const LABEL_CHAR_WIDTH: f32 = 8.0;

/// Text button firing `on_click` on a press and release inside it.
pub struct Button {
    label: String,
    padding: f32,
    on_click: Option<Rc<dyn Fn()>>,
    pressed: bool,
    bounds: Rect,
}

pub fn button(label: impl Into<String>) -> Button {
    Button {
        label: label.into(),
        padding: 0.0,
        on_click: None,
        pressed: false,
        bounds: Rect::default(),
    }
}

impl Button {
    /// Space around the button, outside its hit area
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn on_click<F: Fn() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }

    fn hit_area(&self) -> Rect {
        self.bounds.inset(self.padding)
    }

    fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            request_paint();
        }
    }
}

impl Widget for Button {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let label_width = self.label.chars().count() as f32 * LABEL_CHAR_WIDTH;
        let content = Size::new(
            label_width + BUTTON_HORIZONTAL_PADDING * 2.0 + self.padding * 2.0,
            BUTTON_HEIGHT + self.padding * 2.0,
        );
        let size = constraints.constrain(content);
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
        ctx.draw_button(&self.label, self.hit_area(), self.pressed);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        match *event {
            Event::MouseDown { x, y } if self.hit_area().contains(x, y) => {
                self.set_pressed(true);
                EventResponse::Handled
            }
            Event::MouseUp { x, y } if self.pressed => {
                self.set_pressed(false);
                if self.hit_area().contains(x, y) {
                    log::debug!("button `{}` clicked", self.label);
                    if let Some(callback) = &self.on_click {
                        callback();
                    }
                }
                EventResponse::Handled
            }
            Event::MouseLeave => {
                self.set_pressed(false);
                EventResponse::Ignored
            }
            _ => EventResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::reactive::{with_app_state, with_app_state_mut};

    fn laid_out(clicks: Rc<Cell<u32>>) -> Button {
        let mut widget = button("Move Box")
            .padding(20.0)
            .on_click(move || clicks.set(clicks.get() + 1));
        widget.layout(Constraints::loose(Size::new(411.0, 891.0)));
        widget.set_origin(0.0, 0.0);
        widget
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MouseDown { x, y }
    }

    fn release(x: f32, y: f32) -> Event {
        Event::MouseUp { x, y }
    }

    #[test]
    fn test_layout_includes_padding() {
        let widget = laid_out(Rc::new(Cell::new(0)));
        assert_eq!(widget.bounds(), Rect::new(0.0, 0.0, 152.0, 80.0));
        assert_eq!(widget.hit_area(), Rect::new(20.0, 20.0, 112.0, 40.0));
    }

    #[test]
    fn test_press_and_release_inside_clicks() {
        let clicks = Rc::new(Cell::new(0));
        let mut widget = laid_out(clicks.clone());

        assert_eq!(widget.event(&press(50.0, 40.0)), EventResponse::Handled);
        assert_eq!(widget.event(&release(50.0, 40.0)), EventResponse::Handled);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_release_outside_cancels() {
        let clicks = Rc::new(Cell::new(0));
        let mut widget = laid_out(clicks.clone());

        widget.event(&press(50.0, 40.0));
        widget.event(&release(300.0, 40.0));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_padding_is_not_clickable() {
        let clicks = Rc::new(Cell::new(0));
        let mut widget = laid_out(clicks.clone());

        assert_eq!(widget.event(&press(5.0, 5.0)), EventResponse::Ignored);
        widget.event(&release(5.0, 5.0));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_pointer_leaving_cancels_press() {
        let clicks = Rc::new(Cell::new(0));
        let mut widget = laid_out(clicks.clone());

        widget.event(&press(50.0, 40.0));
        with_app_state_mut(|state| state.clear_paint_flag());
        assert_eq!(widget.event(&Event::MouseLeave), EventResponse::Ignored);
        assert!(with_app_state(|state| state.needs_paint()));

        assert_eq!(widget.event(&release(50.0, 40.0)), EventResponse::Ignored);
        assert_eq!(clicks.get(), 0);
    }
}
