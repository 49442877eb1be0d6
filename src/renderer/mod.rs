//! Headless display list.
//!
//! Widgets paint into a [`PaintContext`], which records [`DrawCommand`]s in
//! paint order. A host compositor turns those into pixels; the frame driver
//! keeps them as [`Frame`]s.

use crate::widgets::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect { rect: Rect, color: Color },
    /// Bitmap asset rotated clockwise about the rect center
    Image {
        asset: String,
        description: String,
        rect: Rect,
        rotation_degrees: f32,
    },
    /// Material button with a text label
    Button {
        label: String,
        rect: Rect,
        pressed: bool,
    },
}

#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    pub fn draw_image(&mut self, asset: &str, description: &str, rect: Rect, rotation_degrees: f32) {
        self.commands.push(DrawCommand::Image {
            asset: asset.to_string(),
            description: description.to_string(),
            rect,
            rotation_degrees,
        });
    }

    pub fn draw_button(&mut self, label: &str, rect: Rect, pressed: bool) {
        self.commands.push(DrawCommand::Button {
            label: label.to_string(),
            rect,
            pressed,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the context empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

/// One painted frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Frame clock time in milliseconds
    pub time_ms: f64,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// First filled rectangle, i.e. the animated box of the box demos
    pub fn first_rect(&self) -> Option<(Rect, Color)> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Rotation of the first image
    pub fn first_image_rotation(&self) -> Option<f32> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Image {
                rotation_degrees, ..
            } => Some(*rotation_degrees),
            _ => None,
        })
    }

    /// Bounds of the first button
    pub fn first_button(&self) -> Option<Rect> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Button { rect, .. } => Some(*rect),
            _ => None,
        })
    }
}
