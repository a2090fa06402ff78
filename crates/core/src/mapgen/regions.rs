//! Connected-component labeling of land and water regions.
//!
//! Two worklists drive the fill. The frontier grows one region at a time; any cell of the
//! other terrain it touches goes onto the boundary list, which seeds the next regions.
//! Every cell is labeled exactly once, although a boundary cell may be queued several times.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::types::{Pos, RegionId, UNLABELED};

use super::grid::Grid;

/// Labels every cell with the id of its 8-connected same-terrain region and returns the
/// number of regions. Ids count up from 1 in discovery order starting at the origin.
pub fn label_regions(grid: &mut Grid) -> RegionId {
    grid.clear_regions();

    let mut next_id = UNLABELED;
    let mut boundary = VecDeque::from([Pos { y: 0, x: 0 }]);
    while let Some(start) = boundary.pop_front() {
        if grid.region_at(start) != UNLABELED {
            continue;
        }
        next_id += 1;
        let size = flood_region(grid, start, next_id, &mut boundary);
        trace!(
            "region {next_id} of {:?} starts at {start:?} with {size} cells",
            grid.terrain_at(start)
        );
    }

    debug!("labeled {}x{} grid into {next_id} regions", grid.width(), grid.height());
    next_id
}

fn flood_region(grid: &mut Grid, start: Pos, id: RegionId, boundary: &mut VecDeque<Pos>) -> usize {
    let terrain = grid.terrain_at(start);
    let mut size = 0;
    let mut frontier = VecDeque::from([start]);
    while let Some(pos) = frontier.pop_front() {
        if grid.region_at(pos) != UNLABELED {
            continue;
        }
        if grid.terrain_at(pos) != terrain {
            boundary.push_back(pos);
            continue;
        }
        grid.set_region(pos, id);
        size += 1;
        frontier.extend(grid.neighbors(pos));
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Terrain;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len()).expect("valid grid");
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                if cell == '#' {
                    grid.set_terrain(Pos { y: y as i32, x: x as i32 }, Terrain::Land);
                }
            }
        }
        grid
    }

    fn id_rows(grid: &Grid) -> Vec<Vec<RegionId>> {
        grid.ids().chunks(grid.width()).map(<[RegionId]>::to_vec).collect()
    }

    #[test]
    fn uniform_grid_is_a_single_region() {
        let mut grid = grid_from_rows(&["....", "....", "...."]);
        assert_eq!(label_regions(&mut grid), 1);
        assert!(grid.ids().iter().all(|&id| id == 1));
    }

    #[test]
    fn single_cell_grid_gets_one_region() {
        let mut grid = Grid::new(1, 1).expect("valid grid");
        assert_eq!(label_regions(&mut grid), 1);
        assert_eq!(grid.to_string(), "\nA ");
    }

    #[test]
    fn two_cell_strip_splits_by_terrain_in_scan_order() {
        let mut grid = grid_from_rows(&[".#"]);
        assert_eq!(label_regions(&mut grid), 2);
        assert_eq!(grid.ids(), &[1, 2]);
        assert_eq!(grid.to_string(), "\nA B ");

        let mut flipped = grid_from_rows(&["#."]);
        assert_eq!(label_regions(&mut flipped), 2);
        assert_eq!(flipped.ids(), &[1, 2]);
    }

    #[test]
    fn diagonal_contact_joins_cells() {
        let mut grid = grid_from_rows(&["#..", ".#.", "..#"]);
        assert_eq!(label_regions(&mut grid), 2);
        assert_eq!(id_rows(&grid), vec![vec![1, 2, 2], vec![2, 1, 2], vec![2, 2, 1]]);
    }

    #[test]
    fn enclosed_lake_gets_its_own_region() {
        let mut grid = grid_from_rows(&[".....", ".###.", ".#.#.", ".###.", "....."]);
        assert_eq!(label_regions(&mut grid), 3);
        assert_eq!(grid.region_at(Pos { y: 0, x: 0 }), 1);
        assert_eq!(grid.region_at(Pos { y: 1, x: 1 }), 2);
        assert_eq!(grid.region_at(Pos { y: 2, x: 2 }), 3);
        assert_eq!(grid.region_at(Pos { y: 4, x: 4 }), 1);
    }

    #[test]
    fn separate_islands_get_distinct_ids() {
        let mut grid = grid_from_rows(&["#...#", ".....", "#...#"]);
        assert_eq!(label_regions(&mut grid), 5);

        let corners = [
            Pos { y: 0, x: 0 },
            Pos { y: 0, x: 4 },
            Pos { y: 2, x: 0 },
            Pos { y: 2, x: 4 },
        ];
        let mut ids: Vec<RegionId> = corners.iter().map(|&pos| grid.region_at(pos)).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(&grid.region_at(Pos { y: 1, x: 2 })));
    }

    #[test]
    fn relabeling_after_terrain_change_starts_from_one() {
        let mut grid = grid_from_rows(&["#.#"]);
        assert_eq!(label_regions(&mut grid), 3);

        grid.set_terrain(Pos { y: 0, x: 1 }, Terrain::Land);
        assert_eq!(label_regions(&mut grid), 1);
        assert_eq!(grid.ids(), &[1, 1, 1]);
    }

    #[test]
    fn checkerboard_collapses_into_two_diagonal_regions() {
        let mut grid = grid_from_rows(&["#.#.", ".#.#", "#.#.", ".#.#"]);
        assert_eq!(label_regions(&mut grid), 2);
        assert_eq!(grid.region_at(Pos { y: 0, x: 0 }), 1);
        assert_eq!(grid.region_at(Pos { y: 0, x: 1 }), 2);
    }
}
