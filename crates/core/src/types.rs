use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer coordinate in graph space (grid nodes) or tile space (buffer cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
}

/// Local, non-retriable precondition failures. Nothing here is transient:
/// every variant means the caller supplied inconsistent parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A block or corridor write would land outside the allocated tile buffer.
    TileOutOfBounds { x: usize, y: usize, width: usize, height: usize },
    /// A graph node carries a negative coordinate and cannot map into tile space.
    NegativeCoordinate { coord: Coord },
    /// A neighbor-selection index fell outside the remaining candidate set.
    RandomDrawOutOfRange { index: usize, len: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileOutOfBounds { x, y, width, height } => {
                write!(f, "tile write at ({x}, {y}) is outside the {width}x{height} buffer")
            }
            Self::NegativeCoordinate { coord } => {
                write!(f, "graph node at ({}, {}) has a negative coordinate", coord.x, coord.y)
            }
            Self::RandomDrawOutOfRange { index, len } => {
                write!(f, "random draw index {index} is out of range for {len} candidates")
            }
        }
    }
}

impl std::error::Error for MazeError {}
