//! Sprite pose selection.
//!
//! Poses are tested in a fixed priority order and every pose whose condition
//! holds runs its frame timer, so a later pose overrides the row and column
//! of an earlier one but not its timer side effects. Idle only runs when no
//! other pose applied this frame.

use explorer_core::input::{InputSource, Key};
use serde::{Deserialize, Serialize};

use crate::player::{AnimationCounters, Facing, PlayerEntity};

/// How a pose's frame counter behaves past its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Cycle,
    Hold,
}

/// Frame count and per-frame interval of a timed pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    pub frames: u32,
    pub interval_ms: f32,
    pub wrap: Wrap,
}

pub const RUN_TIMING: FrameTiming = FrameTiming {
    frames: 3,
    interval_ms: 200.0,
    wrap: Wrap::Cycle,
};
pub const JUMP_TIMING: FrameTiming = FrameTiming {
    frames: 3,
    interval_ms: 25.0,
    wrap: Wrap::Hold,
};
pub const CROUCH_TIMING: FrameTiming = FrameTiming {
    frames: 2,
    interval_ms: 100.0,
    wrap: Wrap::Cycle,
};
pub const IDLE_TIMING: FrameTiming = FrameTiming {
    frames: 6,
    interval_ms: 400.0,
    wrap: Wrap::Cycle,
};

/// Gameplay state shown by the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    RunLeft,
    RunRight,
    Bounce,
    Jump,
    Fall,
    Crouch,
    Idle,
}

/// Active poses in evaluation order; later entries win.
pub const POSE_PRIORITY: [Pose; 6] = [
    Pose::RunLeft,
    Pose::RunRight,
    Pose::Bounce,
    Pose::Jump,
    Pose::Fall,
    Pose::Crouch,
];

/// Everything pose selection reads, captured once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoseContext {
    pub left_held: bool,
    pub right_held: bool,
    pub down_held: bool,
    pub grounded: bool,
    pub is_jumping: bool,
    pub bounced: bool,
    pub facing: Facing,
}

impl PoseContext {
    pub fn capture(player: &PlayerEntity, input: &dyn InputSource) -> Self {
        Self {
            left_held: input.is_pressed(Key::Left),
            right_held: input.is_pressed(Key::Right),
            down_held: input.is_pressed(Key::Down),
            grounded: player.grounded,
            is_jumping: player.is_jumping,
            bounced: player.bounced,
            facing: player.facing,
        }
    }
}

impl Pose {
    /// Whether this pose's condition holds. Idle is the fallback and never
    /// applies on its own.
    pub fn applies(self, ctx: &PoseContext) -> bool {
        match self {
            Pose::RunLeft => ctx.left_held && ctx.grounded,
            Pose::RunRight => ctx.right_held && ctx.grounded,
            Pose::Bounce => ctx.bounced,
            Pose::Jump => ctx.is_jumping && !ctx.bounced,
            Pose::Fall => !ctx.grounded && !ctx.is_jumping && !ctx.bounced,
            Pose::Crouch => ctx.down_held && ctx.grounded,
            Pose::Idle => false,
        }
    }

    /// Sprite sheet row.
    pub fn row(self, facing: Facing) -> u32 {
        match (self, facing) {
            (Pose::Idle, _) => 0,
            (Pose::RunRight, _) => 1,
            (Pose::RunLeft, _) => 2,
            (Pose::Jump, Facing::Right) => 2,
            (Pose::Jump, Facing::Left) => 3,
            (Pose::Fall, Facing::Right) => 3,
            (Pose::Fall, Facing::Left) => 4,
            (Pose::Crouch, _) => 5,
            (Pose::Bounce, _) => 6,
        }
    }
}

/// Poses whose conditions hold, in priority order.
pub fn active_poses(ctx: &PoseContext) -> impl Iterator<Item = Pose> + '_ {
    POSE_PRIORITY.into_iter().filter(move |pose| pose.applies(ctx))
}

/// The pose that ends up displayed for `ctx`.
pub fn select_pose(ctx: &PoseContext) -> Pose {
    active_poses(ctx).last().unwrap_or(Pose::Idle)
}

/// Row and column of the selected sprite cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteCell {
    pub row: u32,
    pub column: u32,
}

/// Advance `counter` when the shared timer has reached the interval, then
/// accumulate this frame's elapsed time.
fn advance(counter: &mut u32, timer: &mut f32, timing: FrameTiming, elapsed_ms: f32) -> u32 {
    if *timer >= timing.interval_ms {
        let last = timing.frames - 1;
        *counter = match timing.wrap {
            Wrap::Cycle if *counter >= last => 0,
            Wrap::Hold if *counter >= last => last,
            _ => *counter + 1,
        };
        *timer = 0.0;
    }
    *timer += elapsed_ms;
    *counter
}

fn play(
    pose: Pose,
    facing: Facing,
    counters: &mut AnimationCounters,
    elapsed_ms: f32,
) -> SpriteCell {
    let AnimationCounters {
        run,
        jump,
        crouch,
        idle,
        timer,
    } = counters;
    let column = match pose {
        Pose::RunLeft | Pose::RunRight => advance(run, timer, RUN_TIMING, elapsed_ms),
        Pose::Jump => advance(jump, timer, JUMP_TIMING, elapsed_ms),
        Pose::Crouch => advance(crouch, timer, CROUCH_TIMING, elapsed_ms),
        Pose::Idle => advance(idle, timer, IDLE_TIMING, elapsed_ms),
        Pose::Bounce => match facing {
            Facing::Left => 0,
            Facing::Right => 1,
        },
        Pose::Fall => 0,
    };
    SpriteCell {
        row: pose.row(facing),
        column,
    }
}

/// Pick this frame's pose and sprite cell, running the frame timer of every
/// applicable pose.
pub fn animate(
    player: &mut PlayerEntity,
    input: &dyn InputSource,
    elapsed_ms: f32,
) -> (Pose, SpriteCell) {
    let ctx = PoseContext::capture(player, input);
    let mut shown = None;
    for pose in active_poses(&ctx) {
        let cell = play(pose, ctx.facing, &mut player.animation, elapsed_ms);
        shown = Some((pose, cell));
    }
    let (pose, cell) = match shown {
        Some(shown) => shown,
        None => (
            Pose::Idle,
            play(Pose::Idle, ctx.facing, &mut player.animation, elapsed_ms),
        ),
    };
    tracing::trace!(?pose, row = cell.row, column = cell.column, "Selected pose");
    (pose, cell)
}
