pub mod frame;
pub mod input;
pub mod tilemap;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::frame::{RenderFrame, Simulation};
    use crate::input::InputSource;
    use crate::tilemap::TileGrid;

    /// Grid of `width * height` passable (index 0) tiles.
    pub fn empty_grid(width: u32, height: u32) -> TileGrid {
        let data = vec![0; width as usize * height as usize];
        TileGrid::from_indices(width, height, &data).expect("empty grid dimensions are valid")
    }

    /// Grid from explicit rows of tile indices. All rows must share a length.
    pub fn grid_from_rows(rows: &[&[u32]]) -> TileGrid {
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let data: Vec<u32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        TileGrid::from_indices(width, rows.len() as u32, &data)
            .expect("grid rows must be non-empty and equal length")
    }

    /// Deterministic random level: a solid floor, scattered solid blocks,
    /// bounce pads, and hazards, plus a few out-of-range indices.
    pub fn random_grid(seed: u64, width: u32, height: u32) -> TileGrid {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0u32; width as usize * height as usize];
        for row in 0..height as usize {
            for col in 0..width as usize {
                let cell = &mut data[row * width as usize + col];
                if row + 1 == height as usize {
                    *cell = 1;
                    continue;
                }
                *cell = match rng.random_range(0u32..100) {
                    0..=79 => 0,
                    80..=89 => 1,
                    90..=92 => 4,
                    93..=94 => 9,
                    95..=96 => 5,
                    97 => 13,
                    _ => rng.random_range(14u32..64),
                };
            }
        }
        TileGrid::from_indices(width, height, &data).expect("random grid dimensions are valid")
    }

    /// Step `sim` `n` times with the same input and elapsed time, returning
    /// every produced frame.
    pub fn run_frames(
        sim: &mut dyn Simulation,
        n: usize,
        elapsed_ms: f32,
        input: &dyn InputSource,
    ) -> Vec<RenderFrame> {
        (0..n).map(|_| sim.step_frame(elapsed_ms, input)).collect()
    }

}
