pub mod mapgen;
pub mod types;

pub use mapgen::{Grid, IslandGenerator, generate_island, label_regions, render, verify_labeling};
pub use types::*;
