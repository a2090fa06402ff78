//! Terrain storage with a parallel region-id layer and 8-way neighbor geometry.

use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{GridError, Pos, RegionId, Terrain, UNLABELED};

use super::render::render;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Terrain>,
    ids: Vec<RegionId>,
}

impl Grid {
    /// Creates an all-water grid with every cell unlabeled.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells <= i32::MAX as usize)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            tiles: vec![Terrain::Water; cells],
            ids: vec![UNLABELED; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn terrain_at(&self, pos: Pos) -> Terrain {
        self.tiles[self.index(pos)]
    }

    pub fn set_terrain(&mut self, pos: Pos, terrain: Terrain) {
        let index = self.index(pos);
        self.tiles[index] = terrain;
    }

    pub fn region_at(&self, pos: Pos) -> RegionId {
        self.ids[self.index(pos)]
    }

    pub fn set_region(&mut self, pos: Pos, id: RegionId) {
        let index = self.index(pos);
        self.ids[index] = id;
    }

    /// In-bounds cells of the surrounding 3x3 block, excluding `pos` itself.
    /// Borders don't wrap.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut found = Vec::with_capacity(8);
        for x in (pos.x - 1)..=(pos.x + 1) {
            for y in (pos.y - 1)..=(pos.y + 1) {
                let candidate = Pos { y, x };
                if candidate != pos && self.in_bounds(candidate) {
                    found.push(candidate);
                }
            }
        }
        found
    }

    /// Every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width;
        (0..self.cell_count())
            .map(move |index| Pos { y: (index / width) as i32, x: (index % width) as i32 })
    }

    pub fn tiles(&self) -> &[Terrain] {
        &self.tiles
    }

    pub fn ids(&self) -> &[RegionId] {
        &self.ids
    }

    /// Highest id handed out so far, which equals the number of regions after labeling.
    pub fn region_count(&self) -> RegionId {
        self.ids.iter().copied().max().unwrap_or(UNLABELED)
    }

    pub(super) fn clear_regions(&mut self) {
        self.ids.fill(UNLABELED);
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cell_count() * 5);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                Terrain::Water => 0,
                Terrain::Land => 1,
            });
        }
        for id in &self.ids {
            bytes.extend(id.to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.in_bounds(pos), "{pos:?} lies outside the {}x{} grid", self.width, self.height);
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
