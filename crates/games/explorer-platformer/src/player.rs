use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::scroll::ScrollZone;

/// Which way the sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Per-pose frame indices plus the shared elapsed-time accumulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationCounters {
    pub run: u32,
    pub jump: u32,
    pub crouch: u32,
    pub idle: u32,
    /// Milliseconds since a pose last advanced its frame.
    pub timer: f32,
}

/// The single mutable entity threaded through collision, scrolling,
/// physics, and animation each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub x: f32,
    pub y: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Recomputed by collision every frame.
    pub move_left: bool,
    pub move_right: bool,
    pub grounded: bool,
    pub facing: Facing,
    pub is_jumping: bool,
    pub bounced: bool,
    /// Rise so far in the current jump or bounce (shared by both).
    pub jump_accumulator: f32,
    pub jump_height_target: f32,
    pub bounce_height_target: f32,
    pub camera_scroll_x: f32,
    pub scroll_zone: ScrollZone,
    pub animation: AnimationCounters,
}

impl PlayerEntity {
    pub fn new(spawn_x: f32, spawn_y: f32, physics: &PhysicsConfig) -> Self {
        Self {
            x: spawn_x,
            y: spawn_y,
            spawn_x,
            spawn_y,
            move_left: true,
            move_right: true,
            grounded: false,
            facing: Facing::Right,
            is_jumping: false,
            bounced: false,
            jump_accumulator: 0.0,
            jump_height_target: physics.jump_height,
            bounce_height_target: physics.bounce_height,
            camera_scroll_x: 0.0,
            scroll_zone: ScrollZone::Mid,
            animation: AnimationCounters::default(),
        }
    }

    /// Vertical camera offset of the current scroll zone.
    pub fn camera_scroll_y(&self) -> f32 {
        self.scroll_zone.offset()
    }

    /// Back to spawn with the camera at its initial position. Jump, bounce,
    /// and animation state are left untouched.
    pub fn respawn(&mut self) {
        self.x = self.spawn_x;
        self.y = self.spawn_y;
        self.camera_scroll_x = 0.0;
        self.scroll_zone = ScrollZone::Mid;
    }
}
