//! Seeded orchestration of grid construction, terrain seeding and region labeling.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::types::GridError;

use super::grid::Grid;
use super::regions::label_regions;
use super::seed::seed_terrain;

pub struct IslandGenerator {
    seed: u64,
    width: usize,
    height: usize,
}

impl IslandGenerator {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        Self { seed, width, height }
    }

    pub fn generate(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.width, self.height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        seed_terrain(&mut grid, &mut rng);
        label_regions(&mut grid);
        Ok(grid)
    }
}
