//! Island map generation split into grid storage, seeding, labeling and rendering.

mod generator;
mod grid;
mod regions;
mod render;
mod seed;
mod verify;

pub use generator::IslandGenerator;
pub use grid::Grid;
pub use regions::label_regions;
pub use render::{region_glyph, render};
pub use seed::{
    BLOB_DENSITY_DIVISOR, BLOB_SKIP_ODDS, SEEDING_ROUNDS, blobs_per_round, place_blob,
    round_terrain, seed_terrain,
};
pub use verify::verify_labeling;

use crate::types::GridError;

pub fn generate_island(seed: u64, width: usize, height: usize) -> Result<Grid, GridError> {
    IslandGenerator::new(seed, width, height).generate()
}
