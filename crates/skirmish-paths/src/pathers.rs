//! [`Grid`] adaptors implementing the pather traits.
//!
//! Each search reads the board through its own cost model:
//!
//! | Pather | Adjacency | Skips occupied | Step cost |
//! |---|---|---|---|
//! | [`WalkPather`] | 8-way (or 4-way) | yes | destination cost |
//! | [`MovePather`] | 8-way | yes | destination cost + diagonal surcharge |
//! | [`ThreatPather`] | 4-way | no | 1 |

use skirmish_core::{Grid, Point, Tile};

use crate::traits::{AstarPather, Pather, WeightedPather};

/// Walking cost model used by path search.
#[derive(Debug, Clone, Copy)]
pub struct WalkPather<'g> {
    grid: &'g Grid,
    diagonals: bool,
}

impl<'g> WalkPather<'g> {
    /// 8-directional walking.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            diagonals: true,
        }
    }

    /// Walking restricted to cardinal steps. The Manhattan estimate is
    /// admissible under this adjacency.
    pub fn cardinal(grid: &'g Grid) -> Self {
        Self {
            grid,
            diagonals: false,
        }
    }
}

impl Pather for WalkPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.grid
                .neighbors(p, self.diagonals)
                .filter(|t| !t.is_occupied())
                .map(Tile::pos),
        );
    }
}

impl WeightedPather for WalkPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.grid.tile(to).move_cost()
    }
}

impl AstarPather for WalkPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self.grid.heuristic(from, to)
    }
}

/// Movement-range cost model: diagonal steps pay a surcharge.
#[derive(Debug, Clone, Copy)]
pub struct MovePather<'g> {
    grid: &'g Grid,
    diagonal_surcharge: i32,
}

impl<'g> MovePather<'g> {
    pub fn new(grid: &'g Grid, diagonal_surcharge: i32) -> Self {
        Self {
            grid,
            diagonal_surcharge: diagonal_surcharge.max(0),
        }
    }
}

impl Pather for MovePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.grid
                .neighbors(p, true)
                .filter(|t| !t.is_occupied())
                .map(Tile::pos),
        );
    }
}

impl WeightedPather for MovePather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        let base = self.grid.tile(to).move_cost();
        if from.is_diagonal_step(to) {
            base.saturating_add(self.diagonal_surcharge)
        } else {
            base
        }
    }
}

/// Threat propagation: cardinal hops, ignoring terrain and occupancy.
#[derive(Debug, Clone, Copy)]
pub struct ThreatPather<'g> {
    grid: &'g Grid,
}

impl<'g> ThreatPather<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }
}

impl Pather for ThreatPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.grid.neighbors(p, false).map(Tile::pos));
    }
}
