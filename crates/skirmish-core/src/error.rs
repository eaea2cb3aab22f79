use std::fmt;

use crate::geom::{Point, Range};

/// Errors reported by [`Grid`](crate::Grid) construction and checked access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height below 1.
    InvalidSize { width: i32, height: i32 },
    /// A checked access named a coordinate outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// `relocate` targeted a tile that already holds a unit.
    Occupied(Point),
    /// Layout rows have different widths.
    InconsistentLayout { row: usize, expected: usize, found: usize },
    /// Layout contains a character outside the accepted set.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid: invalid size {width}x{height}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: {pos} is outside {bounds}")
            }
            Self::Occupied(pos) => write!(f, "grid: tile {pos} is occupied"),
            Self::InconsistentLayout {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
        }
    }
}

impl std::error::Error for GridError {}
