extern crate self as animate_state;

pub mod animate;
pub mod animation;
pub mod error;
pub mod layout;
pub mod platform;
pub mod reactive;
pub mod renderer;
pub mod screens;
pub mod toggle;
pub mod widgets;

use std::collections::VecDeque;
use std::time::Duration;

use layout::Constraints;
use platform::DisplayMetrics;
use reactive::invalidation::{clear_animation_flag, reset_invalidation};
use reactive::{has_animations, take_frame_request, with_app_state, with_app_state_mut};
use renderer::{Frame, PaintContext};
use widgets::{Event, Widget};

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animate::{
        animate_color_as_state, animate_dp_as_state, animate_float_as_state,
        animate_value_as_state, AnimatedValue,
    };
    pub use crate::animation::{
        interpolate, update_transition, Animatable, Animated, AnimationSpec, Easing,
        KeyframesSpec, Segment, SpringSpec, Transition, TweenSpec,
    };
    pub use crate::error::{Error, Result};
    pub use crate::layout::{Constraints, Size};
    pub use crate::platform::DisplayMetrics;
    pub use crate::reactive::{
        create_effect, create_signal, Effect, IntoMaybeDyn, MaybeDyn, ReadSignal, Signal,
    };
    pub use crate::renderer::{DrawCommand, Frame, PaintContext};
    pub use crate::screens::{Screen, ScreenKind};
    pub use crate::toggle::{BoxColor, BoxPosition, Toggle, ToggleState};
    pub use crate::widgets::{
        button, color_box, column, image, spacer, Color, Column, CrossAxisAlignment, Event,
        EventResponse, Rect, Widget,
    };
    pub use crate::{App, AppConfig};
}

pub struct AppConfig {
    pub metrics: DisplayMetrics,
    /// Step of the frame clock
    pub frame_interval_ms: f64,
    /// The loop stops at this frame time even if animations are still running
    pub max_duration_ms: f64,
    /// Frame times at which the button gets tapped
    pub taps_ms: Vec<f64>,
    /// Sleep between frames so the clock follows wall time
    pub realtime: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            metrics: DisplayMetrics::default(),
            frame_interval_ms: 16.0,
            max_duration_ms: 10_000.0,
            taps_ms: Vec::new(),
            realtime: false,
        }
    }
}

/// A callback that gets called each frame with the frame time, before
/// input and animations are processed.
pub type UpdateCallback = Box<dyn FnMut(f64)>;

pub struct App {
    config: AppConfig,
    on_update: Option<UpdateCallback>,
}

impl App {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            on_update: None,
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            on_update: None,
        }
    }

    pub fn metrics(&self) -> DisplayMetrics {
        self.config.metrics
    }

    pub fn screen_width(mut self, width_dp: f32) -> Self {
        self.config.metrics.screen_width_dp = width_dp;
        self
    }

    pub fn screen_height(mut self, height_dp: f32) -> Self {
        self.config.metrics.screen_height_dp = height_dp;
        self
    }

    pub fn frame_interval_ms(mut self, interval_ms: f64) -> Self {
        self.config.frame_interval_ms = interval_ms;
        self
    }

    pub fn max_duration_ms(mut self, duration_ms: f64) -> Self {
        self.config.max_duration_ms = duration_ms;
        self
    }

    /// Tap the button at `time_ms`. May be called repeatedly.
    pub fn tap_at(mut self, time_ms: f64) -> Self {
        self.config.taps_ms.push(time_ms);
        self
    }

    pub fn realtime(mut self, realtime: bool) -> Self {
        self.config.realtime = realtime;
        self
    }

    /// Set a callback that gets called each frame before input and
    /// animations. Use it to drive signals from outside the widget tree.
    ///
    /// # Example
    /// ```ignore
    /// let rotated = ToggleState::new(false);
    /// let toggle = rotated.clone();
    /// App::new()
    ///     .on_update(move |time_ms| {
    ///         if time_ms == 100.0 {
    ///             toggle.flip();
    ///         }
    ///     })
    ///     .run(screen);
    /// ```
    pub fn on_update<F: FnMut(f64) + 'static>(mut self, callback: F) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Drive `root` until nothing is left to animate and every scripted tap
    /// has been delivered, or until `max_duration_ms`.
    ///
    /// Returns every painted frame in order.
    pub fn run<W: Widget>(mut self, mut root: W) -> Vec<Frame> {
        let _ = env_logger::try_init();

        let interval = self.config.frame_interval_ms.max(1.0);
        let metrics = self.config.metrics;
        log::info!(
            "starting on a {}x{}dp screen, frame interval {}ms",
            metrics.screen_width_dp,
            metrics.screen_height_dp,
            interval
        );

        let mut taps = self.config.taps_ms.clone();
        taps.sort_by(f64::total_cmp);
        let mut taps = VecDeque::from(taps);

        let constraints =
            Constraints::new(0.0, 0.0, metrics.screen_width_dp, metrics.screen_height_dp);
        let mut paint_ctx = PaintContext::with_capacity(8);
        let mut frames: Vec<Frame> = Vec::new();

        root.layout(constraints);
        root.set_origin(0.0, 0.0);
        root.paint(&mut paint_ctx);
        frames.push(Frame {
            time_ms: 0.0,
            commands: paint_ctx.take_commands(),
        });
        with_app_state_mut(|state| {
            state.clear_layout_flag();
            state.clear_paint_flag();
        });

        let mut time = 0.0;
        loop {
            if let Some(ref mut callback) = self.on_update {
                callback(time);
            }

            while taps.front().is_some_and(|tap| *tap <= time) {
                taps.pop_front();
                let target = frames.last().and_then(Frame::first_button);
                match target {
                    Some(rect) => {
                        let (x, y) = rect.center();
                        log::debug!("tap at ({}, {}) on frame {}ms", x, y, time);
                        root.event(&Event::MouseDown { x, y });
                        root.event(&Event::MouseUp { x, y });
                    }
                    None => log::warn!("tap at {}ms dropped, no button on screen", time),
                }
            }

            let animating = root.advance_animations(time) || has_animations();
            clear_animation_flag();

            if with_app_state(|state| state.needs_layout()) {
                root.layout(constraints);
                root.set_origin(0.0, 0.0);
                with_app_state_mut(|state| state.clear_layout_flag());
            }

            if with_app_state(|state| state.needs_paint()) {
                paint_ctx.clear();
                root.paint(&mut paint_ctx);
                let frame = Frame {
                    time_ms: time,
                    commands: paint_ctx.take_commands(),
                };
                log::trace!("frame {}ms: {:?}", time, frame.commands);
                frames.push(frame);
                with_app_state_mut(|state| state.clear_paint_flag());
            }

            let frame_requested = take_frame_request();
            if !animating && !frame_requested && taps.is_empty() {
                break;
            }
            if time >= self.config.max_duration_ms {
                log::info!("frame clock reached {}ms, stopping", time);
                break;
            }

            time += interval;
            if self.config.realtime {
                std::thread::sleep(Duration::from_secs_f64(interval / 1000.0));
            }
        }

        log::info!("stopped after {} painted frames at {}ms", frames.len(), time);
        drop(root);
        reset_invalidation();
        frames
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
