use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terrain {
    #[default]
    Water,
    Land,
}

/// Sequential region label. Regions are numbered from 1 in discovery order.
pub type RegionId = u32;

/// Marks a cell that no region has claimed yet.
pub const UNLABELED: RegionId = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    EmptyDimension { width: usize, height: usize },
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "grid of {width}x{height} exceeds {} cells, the most addressable by Pos",
                    i32::MAX
                )
            }
        }
    }
}

impl Error for GridError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelingViolation {
    Unlabeled { pos: Pos },
    SplitRegion { a: Pos, b: Pos },
    MergedTerrain { a: Pos, b: Pos },
    MissingId { id: RegionId, region_count: RegionId },
    DisconnectedRegion { id: RegionId },
}

impl fmt::Display for LabelingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlabeled { pos } => write!(f, "cell ({}, {}) has no region id", pos.x, pos.y),
            Self::SplitRegion { a, b } => write!(
                f,
                "adjacent same-terrain cells ({}, {}) and ({}, {}) carry different ids",
                a.x, a.y, b.x, b.y
            ),
            Self::MergedTerrain { a, b } => write!(
                f,
                "adjacent cells ({}, {}) and ({}, {}) differ in terrain but share an id",
                a.x, a.y, b.x, b.y
            ),
            Self::MissingId { id, region_count } => {
                write!(f, "region id {id} is unused although {region_count} regions exist")
            }
            Self::DisconnectedRegion { id } => {
                write!(f, "region {id} is split into several disconnected pieces")
            }
        }
    }
}

impl Error for LabelingViolation {}
