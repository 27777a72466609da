use serde::{Deserialize, Serialize};

/// Downward pull per frame while airborne (pixels).
pub const GRAVITY: f32 = 2.0;
/// Horizontal movement per frame while a direction is held (pixels).
pub const RUN_SPEED: f32 = 2.0;
/// Upward movement per frame during a jump. Bounces rise at twice this.
pub const JUMP_SPEED: f32 = 5.0;
/// Total rise of a jump.
pub const JUMP_HEIGHT: f32 = 200.0;
/// Total rise of a small-pad bounce; also the value a finished bounce resets to.
pub const BOUNCE_HEIGHT: f32 = 400.0;
/// Total rise of a big-pad bounce.
pub const BIG_BOUNCE_HEIGHT: f32 = 1700.0;
/// Default spawn point.
pub const SPAWN_X: f32 = 300.0;
pub const SPAWN_Y: f32 = 1000.0;

/// Per-frame movement constants. Not scaled by elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub jump_height: f32,
    pub bounce_height: f32,
    pub big_bounce_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,
            jump_height: JUMP_HEIGHT,
            bounce_height: BOUNCE_HEIGHT,
            big_bounce_height: BIG_BOUNCE_HEIGHT,
        }
    }
}

/// Top-level explorer configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub physics: PhysicsConfig,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Toml(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml(e) => write!(f, "invalid explorer config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Toml(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl ExplorerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("EXPLORER_CONFIG")
            .unwrap_or_else(|_| "config/explorer.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    ExplorerConfig::default()
                },
            },
            Err(_) => ExplorerConfig::default(),
        }
    }
}
