//! Screen information supplied by the host.

/// Logical screen size in density-independent pixels.
///
/// Passed in explicitly so layout and animation targets never depend on
/// global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub screen_width_dp: f32,
    pub screen_height_dp: f32,
}

impl DisplayMetrics {
    pub fn new(screen_width_dp: f32, screen_height_dp: f32) -> Self {
        Self {
            screen_width_dp,
            screen_height_dp,
        }
    }

    /// Horizontal offset that puts a box of `box_side` flush with the right
    /// edge. Clamped to zero when the box is wider than the screen.
    pub fn end_offset(&self, box_side: f32) -> f32 {
        let offset = self.screen_width_dp - box_side;
        if offset < 0.0 {
            log::warn!(
                "box of {}dp does not fit a {}dp wide screen, clamping end offset to 0",
                box_side,
                self.screen_width_dp
            );
            return 0.0;
        }
        offset
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(411.0, 891.0)
    }
}
