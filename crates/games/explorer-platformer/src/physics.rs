use explorer_core::input::{InputSource, Key};

use crate::config::PhysicsConfig;
use crate::player::{Facing, PlayerEntity};

/// Horizontal camera scroll limit (fully scrolled right).
pub const SCROLL_X_MIN: f32 = -2150.0;
/// Horizontal camera scroll limit (fully scrolled left).
pub const SCROLL_X_MAX: f32 = 0.0;
/// The camera follows leftward movement only while the player is left of this x.
pub const SCROLL_LEFT_BELOW_X: f32 = 3000.0;
/// The camera follows rightward movement only while the player is right of this x.
pub const SCROLL_RIGHT_ABOVE_X: f32 = 300.0;

/// Outcome of a rise step. Finished rises surface as frame events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseOutcome {
    Idle,
    Rising,
    BounceFinished,
    JumpFinished,
}

/// Apply held keys and the flags collision just computed: run, scroll the
/// camera horizontally, start jumps, and advance the current rise.
///
/// Displacements are per-frame constants and ignore elapsed time.
pub fn integrate(
    player: &mut PlayerEntity,
    input: &dyn InputSource,
    physics: &PhysicsConfig,
) -> RiseOutcome {
    if input.is_pressed(Key::Left) && player.move_left {
        player.x -= physics.run_speed;
        if player.camera_scroll_x < SCROLL_X_MAX && player.x < SCROLL_LEFT_BELOW_X {
            player.camera_scroll_x += physics.run_speed;
        }
        player.facing = Facing::Left;
    }

    if input.is_pressed(Key::Right) && player.move_right {
        player.x += physics.run_speed;
        if player.camera_scroll_x > SCROLL_X_MIN && player.x > SCROLL_RIGHT_ABOVE_X {
            player.camera_scroll_x -= physics.run_speed;
        }
        player.facing = Facing::Right;
    }

    if input.is_pressed(Key::Up) && player.grounded {
        player.is_jumping = true;
        player.grounded = false;
    }

    rise(player, physics)
}

/// Bounces take precedence over jumps and rise twice as fast. Both share
/// the jump accumulator; falling is left to gravity.
fn rise(player: &mut PlayerEntity, physics: &PhysicsConfig) -> RiseOutcome {
    if player.bounced {
        let step = physics.jump_speed * 2.0;
        player.y -= step;
        player.jump_accumulator += step;
        if player.jump_accumulator >= player.bounce_height_target {
            player.bounced = false;
            player.jump_accumulator = 0.0;
            player.bounce_height_target = physics.bounce_height;
            return RiseOutcome::BounceFinished;
        }
        RiseOutcome::Rising
    } else if player.is_jumping {
        player.y -= physics.jump_speed;
        player.jump_accumulator += physics.jump_speed;
        if player.jump_accumulator >= player.jump_height_target {
            player.is_jumping = false;
            player.jump_accumulator = 0.0;
            return RiseOutcome::JumpFinished;
        }
        RiseOutcome::Rising
    } else {
        RiseOutcome::Idle
    }
}
