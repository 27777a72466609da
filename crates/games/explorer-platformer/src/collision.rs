//! Player-versus-tile-grid collision.
//!
//! The hit boxes are hand-tuned and asymmetric: ground contact is measured
//! off-center toward the player's left side, walls use their own margins,
//! and each special tile has its own overlap window. All offsets are pixels
//! relative to the player's top-left corner and must stay as written.

use explorer_core::tilemap::{TILE_SIZE, Tile, TileCategory, TileGrid};

use crate::config::PhysicsConfig;
use crate::player::PlayerEntity;

/// Written into the jump accumulator on a head bump; exceeds any jump
/// height so the rise ends on the next physics step.
pub const HEAD_BUMP_ACCUMULATOR: f32 = 1000.0;

const TILE: f32 = TILE_SIZE as f32;

/// What the collision pass triggered this frame, beyond the movement flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionReport {
    /// A hazard sent the player back to spawn.
    pub respawned: bool,
    /// The player's head entered a solid tile.
    pub head_bump: bool,
    /// A bounce pad was touched; carries the bounce height now targeted.
    pub bounce: Option<f32>,
    /// Gravity was applied after the scan.
    pub gravity_applied: bool,
}

/// Ground and ceiling window: 10px in from the left edge to 20px in.
fn overlaps_ground_span(player: &PlayerEntity, tx: f32) -> bool {
    player.x + 20.0 >= tx && player.x + 10.0 <= tx + TILE
}

fn standing_on(player: &PlayerEntity, ty: f32) -> bool {
    player.y + 33.0 >= ty && player.y < ty
}

fn head_inside(player: &PlayerEntity, ty: f32) -> bool {
    player.y <= ty + TILE && player.y >= ty
}

fn overlaps_wall_rows(player: &PlayerEntity, ty: f32) -> bool {
    player.y + 30.0 >= ty && player.y < ty + TILE
}

fn blocks_left(player: &PlayerEntity, tx: f32, ty: f32) -> bool {
    player.x + 10.0 - 2.0 <= tx + TILE && player.x + 20.0 > tx && overlaps_wall_rows(player, ty)
}

fn blocks_right(player: &PlayerEntity, tx: f32, ty: f32) -> bool {
    player.x + 24.0 >= tx && player.x + 32.0 < tx + TILE && overlaps_wall_rows(player, ty)
}

fn touches_small_pad(player: &PlayerEntity, tx: f32, ty: f32) -> bool {
    player.x + 16.0 >= tx
        && player.x + 16.0 <= tx + TILE
        && player.y + 32.0 >= ty - 5.0
        && player.y < ty + TILE
}

fn touches_big_pad(player: &PlayerEntity, tx: f32, ty: f32) -> bool {
    player.x >= tx && player.x <= tx + TILE && player.y + 32.0 >= ty - 1.0 && player.y < ty + TILE
}

fn touches_hazard(player: &PlayerEntity, tx: f32, ty: f32) -> bool {
    player.x + 25.0 >= tx
        && player.x <= tx + 25.0
        && player.y + 32.0 >= ty - 2.0
        && player.y < ty + 34.0
}

/// Scan every tile against the player, recompute movement permissions and
/// ground contact, fire pad and hazard effects, then apply gravity if airborne.
///
/// Tiles are visited in grid order and later tiles overwrite earlier ones:
/// a wall hit clears ground contact found by a previous tile, and a hazard
/// respawn moves the player before the remaining tiles are tested.
pub fn resolve(
    player: &mut PlayerEntity,
    grid: &TileGrid,
    physics: &PhysicsConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut move_left = true;
    let mut move_right = true;
    let mut grounded = false;

    for tile in grid.tiles() {
        let tx = tile.x as f32;
        let ty = tile.y as f32;

        if !tile.is_passable() {
            if overlaps_ground_span(player, tx) {
                if standing_on(player, ty) {
                    grounded = true;
                }
                if head_inside(player, ty) {
                    player.jump_accumulator = HEAD_BUMP_ACCUMULATOR;
                    report.head_bump = true;
                }
            }
            if blocks_left(player, tx, ty) {
                move_left = false;
                grounded = false;
            }
            if blocks_right(player, tx, ty) {
                move_right = false;
                grounded = false;
            }
        }

        apply_tile_effect(player, tile, tx, ty, physics, &mut report);
    }

    player.move_left = move_left;
    player.move_right = move_right;
    player.grounded = grounded;

    if !player.grounded {
        player.y += physics.gravity;
        report.gravity_applied = true;
    }

    report
}

fn apply_tile_effect(
    player: &mut PlayerEntity,
    tile: &Tile,
    tx: f32,
    ty: f32,
    physics: &PhysicsConfig,
    report: &mut CollisionReport,
) {
    match tile.category() {
        TileCategory::BounceSmall if touches_small_pad(player, tx, ty) => {
            player.bounced = true;
            report.bounce = Some(player.bounce_height_target);
        },
        TileCategory::Hazard if touches_hazard(player, tx, ty) => {
            player.respawn();
            report.respawned = true;
        },
        TileCategory::BounceBig if touches_big_pad(player, tx, ty) => {
            player.bounce_height_target = physics.big_bounce_height;
            player.bounced = true;
            report.bounce = Some(player.bounce_height_target);
        },
        _ => {},
    }
}
