//! Text rendering of labeled grids, one glyph per region.

use crate::types::{RegionId, UNLABELED};

use super::grid::Grid;

const UPPERCASE_GLYPHS: RegionId = 26;
const ALPHABET_GLYPHS: RegionId = 52;

/// Each row starts on a fresh line and every cell is a glyph followed by a space.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.height() + grid.cell_count() * 2);
    for (index, &id) in grid.ids().iter().enumerate() {
        if index % grid.width() == 0 {
            out.push('\n');
        }
        out.push(region_glyph(id));
        out.push(' ');
    }
    out
}

/// `^` flags a cell that labeling never reached; it should not appear in a labeled grid.
pub fn region_glyph(id: RegionId) -> char {
    if id == UNLABELED {
        return '^';
    }
    let offset = id - 1;
    if offset < UPPERCASE_GLYPHS {
        char::from(b'A' + offset as u8)
    } else if offset < ALPHABET_GLYPHS {
        char::from(b'a' + (offset - UPPERCASE_GLYPHS) as u8)
    } else {
        '?'
    }
}
