use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

use super::widget::{Event, EventResponse, Rect, Widget};

/// Horizontal placement of children inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    Center,
}

/// Vertical stack of children
pub struct Column {
    children: Vec<Box<dyn Widget>>,
    /// Per-child override of the column alignment
    child_alignments: Vec<Option<CrossAxisAlignment>>,
    cross_axis_alignment: CrossAxisAlignment,
    fill_max_width: bool,
    bounds: Rect,
    child_sizes: Vec<Size>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            child_alignments: Vec::new(),
            cross_axis_alignment: CrossAxisAlignment::Start,
            fill_max_width: false,
            bounds: Rect::default(),
            child_sizes: Vec::new(),
        }
    }

    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self.child_alignments.push(None);
        self
    }

    /// Add a child placed with its own alignment
    pub fn child_aligned(
        mut self,
        widget: impl Widget + 'static,
        alignment: CrossAxisAlignment,
    ) -> Self {
        self.children.push(Box::new(widget));
        self.child_alignments.push(Some(alignment));
        self
    }

    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    /// Take the full available width instead of the widest child's
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_width = true;
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

pub fn column() -> Column {
    Column::new()
}

impl Widget for Column {
    fn advance_animations(&mut self, frame_time_ms: f64) -> bool {
        let mut any_animating = false;
        for child in &mut self.children {
            any_animating |= child.advance_animations(frame_time_ms);
        }
        any_animating
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let child_constraints =
            Constraints::new(0.0, 0.0, constraints.max_width, constraints.max_height);

        self.child_sizes.clear();
        let mut width: f32 = 0.0;
        let mut height = 0.0;
        for child in &mut self.children {
            let size = child.layout(child_constraints);
            width = width.max(size.width);
            height += size.height;
            self.child_sizes.push(size);
        }

        if self.fill_max_width && constraints.max_width.is_finite() {
            width = constraints.max_width;
        }

        let size = constraints.constrain(Size::new(width, height));
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;

        let mut child_y = y;
        let placements = self.child_sizes.iter().zip(&self.child_alignments);
        for (child, (size, alignment)) in self.children.iter_mut().zip(placements) {
            let child_x = match alignment.unwrap_or(self.cross_axis_alignment) {
                CrossAxisAlignment::Start => x,
                CrossAxisAlignment::Center => x + (self.bounds.width - size.width) / 2.0,
            };
            child.set_origin(child_x, child_y);
            child_y += size.height;
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, ctx: &mut PaintContext) {
        for child in &self.children {
            child.paint(ctx);
        }
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        for child in &mut self.children {
            if child.event(event) == EventResponse::Handled {
                return EventResponse::Handled;
            }
        }
        EventResponse::Ignored
    }
}

/// Fixed vertical gap
pub struct Spacer {
    height: f32,
    bounds: Rect,
}

pub fn spacer(height: f32) -> Spacer {
    Spacer {
        height,
        bounds: Rect::default(),
    }
}

impl Widget for Spacer {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(Size::new(0.0, self.height));
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

    fn paint(&self, _ctx: &mut PaintContext) {}
}
