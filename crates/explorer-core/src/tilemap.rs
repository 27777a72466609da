use serde::{Deserialize, Serialize};

/// Edge length of a tile in pixels.
pub const TILE_SIZE: i32 = 32;

/// Tile indices the player can move through freely.
pub const PASSABLE_INDICES: [u32; 4] = [0, 2, 6, 8];
/// Small bounce pad: launches the player to the default bounce height.
pub const BOUNCE_SMALL_INDEX: u32 = 4;
/// Big bounce pad: launches the player to the big bounce height.
pub const BOUNCE_BIG_INDEX: u32 = 9;
/// Tile indices that send the player back to spawn.
pub const HAZARD_INDICES: [u32; 2] = [5, 13];

/// Collision category of a tile index.
///
/// Categories overlap: every non-passable index is also solid, so a bounce
/// pad or hazard blocks movement in addition to its special effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileCategory {
    Passable,
    Solid,
    BounceSmall,
    BounceBig,
    Hazard,
}

impl TileCategory {
    /// The most specific category for `type_index`. Unknown indices are solid.
    pub fn of(type_index: u32) -> Self {
        if PASSABLE_INDICES.contains(&type_index) {
            TileCategory::Passable
        } else if type_index == BOUNCE_SMALL_INDEX {
            TileCategory::BounceSmall
        } else if type_index == BOUNCE_BIG_INDEX {
            TileCategory::BounceBig
        } else if HAZARD_INDICES.contains(&type_index) {
            TileCategory::Hazard
        } else {
            TileCategory::Solid
        }
    }
}

/// One 32x32 grid cell, positioned by its top-left corner in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub type_index: u32,
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn category(&self) -> TileCategory {
        TileCategory::of(self.type_index)
    }

    pub fn is_passable(&self) -> bool {
        self.category() == TileCategory::Passable
    }

    pub fn is_bounce_small(&self) -> bool {
        self.category() == TileCategory::BounceSmall
    }

    pub fn is_bounce_big(&self) -> bool {
        self.category() == TileCategory::BounceBig
    }

    pub fn is_hazard(&self) -> bool {
        self.category() == TileCategory::Hazard
    }
}

/// Errors raised while materializing a tile grid.
#[derive(Debug)]
pub enum MapError {
    /// Width of zero tiles.
    ZeroWidth,
    /// The data array does not hold `width * height` entries.
    SizeMismatch { expected: usize, actual: usize },
    /// The map document has no tile layer.
    NoLayers,
    /// The map document is not valid JSON for the expected layout.
    Json(serde_json::Error),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "tile grid width must be at least 1"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "tile grid expects {expected} cells, got {actual}")
            },
            Self::NoLayers => write!(f, "map document has no tile layers"),
            Self::Json(e) => write!(f, "malformed map document: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Subset of a Tiled map document: dimensions plus layer data.
#[derive(Debug, Deserialize)]
struct MapDocument {
    width: u32,
    height: u32,
    layers: Vec<MapLayer>,
}

#[derive(Debug, Deserialize)]
struct MapLayer {
    data: Vec<u32>,
}

/// The static level: tiles in row-major order, immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileGrid {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from a row-major list of tile indices.
    pub fn from_indices(width: u32, height: u32, data: &[u32]) -> Result<Self, MapError> {
        if width == 0 {
            return Err(MapError::ZeroWidth);
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let tiles = data
            .iter()
            .enumerate()
            .map(|(i, &type_index)| {
                let col = (i % width as usize) as i32;
                let row = (i / width as usize) as i32;
                Tile {
                    type_index,
                    x: col * TILE_SIZE,
                    y: row * TILE_SIZE,
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build a grid from a Tiled JSON map, using the first layer.
    pub fn from_tiled_json(json: &str) -> Result<Self, MapError> {
        let doc: MapDocument = serde_json::from_str(json)?;
        let layer = doc.layers.first().ok_or(MapError::NoLayers)?;
        let grid = Self::from_indices(doc.width, doc.height, &layer.data)?;
        tracing::debug!(
            width = grid.width,
            height = grid.height,
            "Loaded tile grid from map document"
        );
        Ok(grid)
    }

    /// All tiles in row-major order. Collision resolution depends on this order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at column `col`, row `row`, or `None` outside the grid.
    pub fn get(&self, col: i32, row: i32) -> Option<&Tile> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        self.tiles.get(row as usize * self.width as usize + col as usize)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
