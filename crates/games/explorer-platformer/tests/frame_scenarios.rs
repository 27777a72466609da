use explorer_core::frame::FrameRecorder;
use explorer_core::input::{Key, KeyState};
use explorer_core::test_helpers::{empty_grid, random_grid, run_frames};
use explorer_core::tilemap::TileGrid;
use explorer_platformer::animation::Pose;
use explorer_platformer::config::ExplorerConfig;
use explorer_platformer::physics::SCROLL_X_MIN;
use explorer_platformer::scroll::ScrollZone;
use explorer_platformer::{Explorer, FrameEvent};

const WIDTH: usize = 120;
const HEIGHT: usize = 80;
/// Row whose top edge (y = 1056) the default spawn falls onto.
const FLOOR_ROW: usize = 33;

fn grid_with(tiles: &[(usize, usize, u32)]) -> TileGrid {
    let mut data = vec![0u32; WIDTH * HEIGHT];
    for &(col, row, idx) in tiles {
        data[row * WIDTH + col] = idx;
    }
    TileGrid::from_indices(WIDTH as u32, HEIGHT as u32, &data).unwrap()
}

fn floor_with(extra: &[(usize, usize, u32)]) -> TileGrid {
    let mut tiles: Vec<(usize, usize, u32)> = (0..WIDTH).map(|col| (col, FLOOR_ROW, 1)).collect();
    tiles.extend_from_slice(extra);
    grid_with(&tiles)
}

fn spawn_at(x: f32, y: f32) -> ExplorerConfig {
    ExplorerConfig {
        spawn_x: x,
        spawn_y: y,
        ..ExplorerConfig::default()
    }
}

/// Step with no input until the player stands on something.
fn settle(game: &mut Explorer) {
    let idle = KeyState::new();
    for _ in 0..200 {
        game.step(16.0, &idle);
        if game.player().grounded {
            return;
        }
    }
    panic!("player never landed, y={}", game.player().y);
}

#[test]
fn empty_grid_one_frame_falls_by_gravity() {
    let mut game = Explorer::new(empty_grid(WIDTH as u32, HEIGHT as u32), spawn_at(300.0, 1000.0));
    let report = game.step(16.0, &KeyState::new());
    assert!(!game.player().grounded);
    assert_eq!(report.frame.world_y, 1002.0);
}

#[test]
fn big_bounce_tile_sets_big_height() {
    // Tile (col 9, row 31) spans x 288..320 at y = 992.
    let grid = grid_with(&[(9, 31, 9)]);
    let mut game = Explorer::new(grid, spawn_at(300.0, 992.0));
    let report = game.step(16.0, &KeyState::new());
    assert!(game.player().bounced);
    assert_eq!(game.player().bounce_height_target, 1700.0);
    assert!(
        report
            .events
            .contains(&FrameEvent::BounceTriggered { height: 1700.0 })
    );
    assert_eq!(report.pose, Pose::Bounce);
    assert_eq!(report.frame.sprite_row, 6);
}

#[test]
fn hazard_tile_respawns_and_resets_camera() {
    let grid = grid_with(&[(40, 50, 5)]);
    let mut game = Explorer::new(grid, spawn_at(300.0, 1000.0));
    {
        let player = game.player_mut();
        player.x = 1280.0;
        player.y = 1600.0;
        player.camera_scroll_x = -980.0;
        player.scroll_zone = ScrollZone::Bottom;
    }
    let report = game.step(16.0, &KeyState::new());
    assert!(report.events.contains(&FrameEvent::Respawned));
    assert_eq!(report.frame.world_x, 300.0);
    // Back at spawn and airborne, so gravity still applies this frame.
    assert_eq!(report.frame.world_y, 1002.0);
    assert_eq!(report.frame.camera_scroll_x, 0.0);
    assert_eq!(report.frame.camera_scroll_y, -850.0);
}

#[test]
fn scroll_zone_follows_player_down_and_back() {
    let mut game = Explorer::new(empty_grid(WIDTH as u32, HEIGHT as u32), spawn_at(300.0, 1500.0));
    let idle = KeyState::new();
    assert_eq!(game.step(16.0, &idle).frame.camera_scroll_y, -850.0);

    game.player_mut().y = 1650.0;
    let report = game.step(16.0, &idle);
    assert_eq!(report.frame.camera_scroll_y, -1600.0);
    assert!(report.events.contains(&FrameEvent::ScrollZoneChanged {
        from: ScrollZone::Mid,
        to: ScrollZone::Bottom,
    }));

    game.player_mut().y = 1400.0;
    assert_eq!(game.step(16.0, &idle).frame.camera_scroll_y, -850.0);
}

#[test]
fn walking_right_scrolls_until_clamp() {
    let mut game = Explorer::new(empty_grid(WIDTH as u32, HEIGHT as u32), spawn_at(300.0, 1000.0));
    let right = KeyState::holding(&[Key::Right]);
    let frames = run_frames(&mut game, 1200, 16.0, &right);

    let mut prev = 0.0;
    for frame in &frames {
        let delta = prev - frame.camera_scroll_x;
        if prev > SCROLL_X_MIN {
            assert_eq!(delta, 2.0);
        } else {
            assert_eq!(delta, 0.0);
        }
        prev = frame.camera_scroll_x;
    }
    assert_eq!(prev, SCROLL_X_MIN);
}

#[test]
fn lands_on_floor_and_idles() {
    let mut game = Explorer::new(floor_with(&[]), spawn_at(300.0, 1000.0));
    settle(&mut game);
    assert_eq!(game.player().y, 1024.0);

    let report = game.step(16.0, &KeyState::new());
    assert_eq!(report.pose, Pose::Idle);
    assert_eq!(report.frame.world_y, 1024.0, "grounded: no gravity");
}

#[test]
fn jump_rises_then_lands_again() {
    let mut game = Explorer::new(floor_with(&[]), spawn_at(300.0, 1000.0));
    settle(&mut game);

    let up = KeyState::holding(&[Key::Up]);
    let report = game.step(16.0, &up);
    assert!(game.player().is_jumping);
    assert_eq!(report.pose, Pose::Jump);
    assert_eq!(report.frame.sprite_row, 2);

    let idle = KeyState::new();
    let mut apex = report.frame.world_y;
    let mut last_events = Vec::new();
    for _ in 0..39 {
        let report = game.step(16.0, &idle);
        apex = apex.min(report.frame.world_y);
        last_events = report.events;
    }
    assert!(!game.player().is_jumping, "rise ends after the jump height");
    assert_eq!(last_events, vec![FrameEvent::JumpFinished]);
    assert_eq!(apex, 902.0);

    settle(&mut game);
    assert_eq!(game.player().y, 1024.0);
}

#[test]
fn wall_stops_running_player() {
    let mut game = Explorer::new(floor_with(&[(15, FLOOR_ROW - 1, 1)]), spawn_at(300.0, 1000.0));
    settle(&mut game);

    let mut sink = FrameRecorder::new();
    let right = KeyState::holding(&[Key::Right]);
    for _ in 0..200 {
        game.run_frame(16.0, &right, &mut sink);
    }
    let last = sink.last().copied().unwrap();
    assert_eq!(last.world_x, 456.0);
    assert_eq!(last.camera_scroll_x, -156.0);
    assert!(game.player().grounded);
    assert!(!game.player().move_right);
    assert_eq!(sink.frames.len(), 200);
}

#[test]
fn crouching_on_the_floor_shows_crouch_row() {
    let mut game = Explorer::new(floor_with(&[]), spawn_at(300.0, 1000.0));
    settle(&mut game);
    let report = game.step(16.0, &KeyState::holding(&[Key::Down, Key::Left]));
    assert_eq!(report.pose, Pose::Crouch);
    assert_eq!(report.frame.sprite_row, 5);
}

#[test]
fn random_levels_never_panic_and_keep_camera_in_bounds() {
    for seed in 0..20 {
        let grid = random_grid(seed, 60, 40);
        let mut game = Explorer::new(grid, spawn_at(300.0, 600.0));
        let keys = [
            KeyState::holding(&[Key::Right]),
            KeyState::holding(&[Key::Right, Key::Up]),
            KeyState::holding(&[Key::Left]),
            KeyState::holding(&[Key::Down]),
        ];
        for frame in 0..400 {
            let report = game.step(16.0, &keys[(frame / 50) % keys.len()]);
            let f = report.frame;
            assert!(f.world_x.is_finite() && f.world_y.is_finite());
            assert!(f.camera_scroll_x <= 0.0 && f.camera_scroll_x >= SCROLL_X_MIN);
            assert!([0.0, -850.0, -1600.0].contains(&f.camera_scroll_y));
        }
    }
}
