use serde::{Deserialize, Serialize};

use crate::input::InputSource;

/// Horizontal and vertical stride between sprite-sheet cells (1px border).
pub const SPRITE_STRIDE: u32 = 31;
/// Edge length of a sprite cell in pixels.
pub const SPRITE_SIZE: u32 = 32;

/// Everything the renderer needs for one frame. Fully determined before
/// the render sink sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub sprite_column: u32,
    pub sprite_row: u32,
    pub world_x: f32,
    pub world_y: f32,
    pub camera_scroll_x: f32,
    pub camera_scroll_y: f32,
}

impl RenderFrame {
    /// Source rectangle `(x, y, w, h)` of the selected cell in the sprite sheet.
    pub fn atlas_rect(&self) -> (u32, u32, u32, u32) {
        (
            self.sprite_column * SPRITE_STRIDE,
            self.sprite_row * SPRITE_STRIDE,
            SPRITE_SIZE,
            SPRITE_SIZE,
        )
    }
}

/// Consumer of finished frames (canvas, recorder, network mirror...).
pub trait RenderSink {
    fn present(&mut self, frame: &RenderFrame);
}

/// Sink that keeps every presented frame, in order.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<RenderFrame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames.push(*frame);
    }
}

/// A single-stepped simulation driven by an external frame loop.
///
/// One call runs a full step to completion; the returned frame is what the
/// render sink should draw.
pub trait Simulation {
    /// Advance one frame. `elapsed_ms` drives animation timers only.
    fn step_frame(&mut self, elapsed_ms: f32, input: &dyn InputSource) -> RenderFrame;

    /// Frames stepped so far.
    fn frame_count(&self) -> u64;
}
