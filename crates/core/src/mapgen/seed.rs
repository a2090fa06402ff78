//! Randomized blob placement that turns an all-water grid into rough islands.

use log::debug;
use rand_chacha::rand_core::Rng;

use crate::types::{Pos, Terrain};

use super::grid::Grid;

pub const SEEDING_ROUNDS: usize = 4;
pub const BLOB_DENSITY_DIVISOR: usize = 20;
/// A neighbor is left untouched when a draw from `0..BLOB_SKIP_ODDS` hits zero.
pub const BLOB_SKIP_ODDS: u64 = 8;

pub(super) fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    debug_assert!(bound > 0);
    (rng.next_u64() % bound as u64) as usize
}

pub(super) fn random_pos<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Pos {
    let x = random_below(rng, width);
    let y = random_below(rng, height);
    Pos { y: y as i32, x: x as i32 }
}

pub fn blobs_per_round(width: usize, height: usize) -> usize {
    ((width * height) / BLOB_DENSITY_DIVISOR).max(1)
}

/// Even rounds raise land, odd rounds flood it back.
pub fn round_terrain(round: usize) -> Terrain {
    if round % 2 == 0 { Terrain::Land } else { Terrain::Water }
}

/// Paints `pos` and, with 7/8 odds each, its in-bounds neighbors.
pub fn place_blob<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, pos: Pos, terrain: Terrain) {
    grid.set_terrain(pos, terrain);
    for neighbor in grid.neighbors(pos) {
        if rng.next_u64() % BLOB_SKIP_ODDS != 0 {
            grid.set_terrain(neighbor, terrain);
        }
    }
}

/// One land blob, then alternating land and water rounds of scattered blobs.
/// Later blobs overwrite earlier ones.
pub fn seed_terrain<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let (width, height) = (grid.width(), grid.height());

    let origin = random_pos(rng, width, height);
    place_blob(grid, rng, origin, Terrain::Land);

    let blob_count = blobs_per_round(width, height);
    for round in 0..SEEDING_ROUNDS {
        let terrain = round_terrain(round);
        for _ in 0..blob_count {
            let pos = random_pos(rng, width, height);
            place_blob(grid, rng, pos, terrain);
        }
    }

    let land = grid.tiles().iter().filter(|&&tile| tile == Terrain::Land).count();
    debug!(
        "seeded {width}x{height} grid with {blob_count} blobs per round, {land}/{} cells are land",
        grid.cell_count()
    );
}
