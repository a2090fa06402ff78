//! Post-labeling invariant checks shared by tests and the fuzz harness.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{LabelingViolation, Pos, RegionId, UNLABELED};

use super::grid::Grid;

/// Confirms that ids cover every cell, follow terrain exactly, run densely from 1 and
/// that each id forms a single connected piece.
pub fn verify_labeling(grid: &Grid) -> Result<(), LabelingViolation> {
    for pos in grid.positions() {
        let id = grid.region_at(pos);
        if id == UNLABELED {
            return Err(LabelingViolation::Unlabeled { pos });
        }
        for neighbor in grid.neighbors(pos) {
            let same_terrain = grid.terrain_at(neighbor) == grid.terrain_at(pos);
            let same_id = grid.region_at(neighbor) == id;
            if same_terrain && !same_id {
                return Err(LabelingViolation::SplitRegion { a: pos, b: neighbor });
            }
            if !same_terrain && same_id {
                return Err(LabelingViolation::MergedTerrain { a: pos, b: neighbor });
            }
        }
    }

    let region_count = grid.region_count();
    let used: BTreeSet<RegionId> = grid.ids().iter().copied().collect();
    if let Some(id) = (1..=region_count).find(|id| !used.contains(id)) {
        return Err(LabelingViolation::MissingId { id, region_count });
    }

    let mut seen = vec![false; grid.cell_count()];
    let mut reached_ids = BTreeSet::new();
    for start in grid.positions() {
        if seen[cell_index(grid, start)] {
            continue;
        }
        let id = grid.region_at(start);
        if !reached_ids.insert(id) {
            return Err(LabelingViolation::DisconnectedRegion { id });
        }
        let mut open = VecDeque::from([start]);
        seen[cell_index(grid, start)] = true;
        while let Some(pos) = open.pop_front() {
            for next in grid.neighbors(pos) {
                let index = cell_index(grid, next);
                if !seen[index] && grid.region_at(next) == id {
                    seen[index] = true;
                    open.push_back(next);
                }
            }
        }
    }

    Ok(())
}

fn cell_index(grid: &Grid, pos: Pos) -> usize {
    (pos.y as usize) * grid.width() + (pos.x as usize)
}
