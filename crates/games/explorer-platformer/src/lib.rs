pub mod animation;
pub mod collision;
pub mod config;
pub mod physics;
pub mod player;
pub mod scroll;

use serde::{Deserialize, Serialize};

use explorer_core::frame::{RenderFrame, RenderSink, Simulation};
use explorer_core::input::InputSource;
use explorer_core::tilemap::TileGrid;
use explorer_core::time::FrameClock;

use animation::{Pose, animate};
use config::ExplorerConfig;
use physics::RiseOutcome;
use player::PlayerEntity;
use scroll::{ScrollZone, update_scroll_zone};

/// Gameplay events raised while stepping a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// A hazard sent the player back to spawn.
    Respawned,
    /// The player's head hit a solid tile, ending the rise.
    HeadBump,
    /// A bounce pad launched the player toward `height`.
    BounceTriggered { height: f32 },
    ScrollZoneChanged { from: ScrollZone, to: ScrollZone },
    /// A jump reached its height; gravity takes over.
    JumpFinished,
    /// A bounce reached its height; gravity takes over.
    BounceFinished,
}

/// Result of one simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: RenderFrame,
    pub pose: Pose,
    pub events: Vec<FrameEvent>,
}

/// The tile-map explorer: one player against a static tile grid.
pub struct Explorer {
    grid: TileGrid,
    player: PlayerEntity,
    config: ExplorerConfig,
    clock: FrameClock,
    frames: u64,
}

impl Explorer {
    pub fn new(grid: TileGrid, config: ExplorerConfig) -> Self {
        let player = PlayerEntity::new(config.spawn_x, config.spawn_y, &config.physics);
        Self {
            grid,
            player,
            config,
            clock: FrameClock::new(),
            frames: 0,
        }
    }

    pub fn player(&self) -> &PlayerEntity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerEntity {
        &mut self.player
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Run one frame: collision, scroll zone, physics, then animation.
    /// `elapsed_ms` only drives animation timers.
    pub fn step(&mut self, elapsed_ms: f32, input: &dyn InputSource) -> FrameReport {
        let tuning = &self.config.physics;
        let mut events = Vec::new();

        let collision = collision::resolve(&mut self.player, &self.grid, tuning);
        if collision.respawned {
            tracing::debug!(
                x = self.player.x,
                y = self.player.y,
                "Hazard touched, respawned"
            );
            events.push(FrameEvent::Respawned);
        }
        if collision.head_bump {
            events.push(FrameEvent::HeadBump);
        }
        if let Some(height) = collision.bounce {
            tracing::debug!(height, "Bounce pad touched");
            events.push(FrameEvent::BounceTriggered { height });
        }

        if let Some((from, to)) = update_scroll_zone(&mut self.player) {
            tracing::debug!(?from, ?to, y = self.player.y, "Scroll zone changed");
            events.push(FrameEvent::ScrollZoneChanged { from, to });
        }

        match physics::integrate(&mut self.player, input, tuning) {
            RiseOutcome::JumpFinished => {
                tracing::debug!(y = self.player.y, "Jump finished");
                events.push(FrameEvent::JumpFinished);
            },
            RiseOutcome::BounceFinished => {
                tracing::debug!(y = self.player.y, "Bounce finished");
                events.push(FrameEvent::BounceFinished);
            },
            RiseOutcome::Idle | RiseOutcome::Rising => {},
        }

        let (pose, cell) = animate(&mut self.player, input, elapsed_ms);
        self.frames += 1;

        FrameReport {
            frame: RenderFrame {
                sprite_column: cell.column,
                sprite_row: cell.row,
                world_x: self.player.x,
                world_y: self.player.y,
                camera_scroll_x: self.player.camera_scroll_x,
                camera_scroll_y: self.player.camera_scroll_y(),
            },
            pose,
            events,
        }
    }

    /// Like [`Explorer::step`], with elapsed time taken from a frame-callback timestamp.
    pub fn tick(&mut self, timestamp_ms: f64, input: &dyn InputSource) -> FrameReport {
        let elapsed = self.clock.tick(timestamp_ms);
        self.step(elapsed, input)
    }

    /// Step, then hand the finished frame to `sink`.
    pub fn run_frame(
        &mut self,
        elapsed_ms: f32,
        input: &dyn InputSource,
        sink: &mut dyn RenderSink,
    ) -> FrameReport {
        let report = self.step(elapsed_ms, input);
        sink.present(&report.frame);
        report
    }
}

impl Simulation for Explorer {
    fn step_frame(&mut self, elapsed_ms: f32, input: &dyn InputSource) -> RenderFrame {
        self.step(elapsed_ms, input).frame
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }
}
