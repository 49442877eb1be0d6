//! The six demo screens.
//!
//! Each screen owns a toggle state, the animations bound to it and a widget
//! tree whose button flips the state.

mod color_change;
mod keyframe;
mod motion;
mod rotation;
mod spring;
mod transition;

use std::fmt;
use std::str::FromStr;

use crate::animation::Animated;
use crate::error::{Error, Result};
use crate::layout::{Constraints, Size};
use crate::platform::DisplayMetrics;
use crate::reactive::IntoMaybeDyn;
use crate::renderer::PaintContext;
use crate::widgets::{
    button, color_box, column, spacer, Color, Column, CrossAxisAlignment, Event, EventResponse,
    Rect, Widget,
};

pub use color_change::color_change_screen;
pub use keyframe::keyframe_screen;
pub use motion::motion_screen;
pub use rotation::rotation_screen;
pub use spring::spring_screen;
pub use transition::transition_screen;

/// Side length of the box the motion screens move
pub const BOX_SIDE: f32 = 70.0;

/// A widget tree plus the animations feeding it
pub struct Screen {
    name: &'static str,
    root: Column,
    animations: Vec<Box<dyn Animated>>,
}

impl Screen {
    pub fn new(name: &'static str, root: Column) -> Self {
        Self {
            name,
            root,
            animations: Vec::new(),
        }
    }

    pub fn animation(mut self, animation: impl Animated + 'static) -> Self {
        self.animations.push(Box::new(animation));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("name", &self.name)
            .field("animations", &self.animations.len())
            .finish()
    }
}

impl Widget for Screen {
    fn advance_animations(&mut self, frame_time_ms: f64) -> bool {
        let mut any_animating = self.root.advance_animations(frame_time_ms);
        for animation in &mut self.animations {
            any_animating |= animation.advance(frame_time_ms);
        }
        any_animating
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        self.root.layout(constraints)
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.root.set_origin(x, y)
    }

    fn bounds(&self) -> Rect {
        self.root.bounds()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        self.root.paint(ctx)
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        self.root.event(event)
    }
}

/// Box sliding along the top of the screen above a centered button
pub(crate) fn moving_box<F>(
    offset_x: impl IntoMaybeDyn<f32>,
    color: impl IntoMaybeDyn<Color>,
    label: &str,
    on_click: F,
) -> Column
where
    F: Fn() + 'static,
{
    column()
        .fill_max_width()
        .child(
            color_box()
                .size(BOX_SIDE)
                .background(color)
                .offset(offset_x, 20.0),
        )
        .child(spacer(50.0))
        .child_aligned(
            button(label).padding(20.0).on_click(on_click),
            CrossAxisAlignment::Center,
        )
}

/// Selects which demo the app shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenKind {
    Rotation,
    ColorChange,
    Motion,
    Spring,
    Keyframe,
    #[default]
    Transition,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Rotation,
        ScreenKind::ColorChange,
        ScreenKind::Motion,
        ScreenKind::Spring,
        ScreenKind::Keyframe,
        ScreenKind::Transition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScreenKind::Rotation => "rotation",
            ScreenKind::ColorChange => "color",
            ScreenKind::Motion => "motion",
            ScreenKind::Spring => "spring",
            ScreenKind::Keyframe => "keyframe",
            ScreenKind::Transition => "transition",
        }
    }

    pub fn build(self, metrics: &DisplayMetrics) -> Result<Screen> {
        let screen = match self {
            ScreenKind::Rotation => rotation_screen(),
            ScreenKind::ColorChange => color_change_screen(),
            ScreenKind::Motion => motion_screen(metrics),
            ScreenKind::Spring => spring_screen(metrics)?,
            ScreenKind::Keyframe => keyframe_screen(metrics)?,
            ScreenKind::Transition => transition_screen(metrics),
        };
        Ok(screen)
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "color_change" => return Ok(ScreenKind::ColorChange),
            "" => return Ok(ScreenKind::default()),
            _ => {}
        }
        ScreenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownScreen(s.to_string()))
    }
}
