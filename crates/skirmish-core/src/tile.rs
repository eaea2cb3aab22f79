//! The [`Tile`] type — one square of the board.

use crate::geom::Point;

/// A board square: fixed coordinate, terrain cost and occupancy.
///
/// The raw cost is retained as authored; searches read
/// [`move_cost`](Tile::move_cost), which is capped by the owning grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pos: Point,
    raw_cost: i32,
    cost: i32,
    occupied: bool,
}

impl Tile {
    /// Create a tile at `pos`. `raw_cost` is clamped into `1..=max_cost`
    /// for search purposes.
    pub fn new(pos: Point, raw_cost: i32, max_cost: i32) -> Self {
        let mut t = Self {
            pos,
            raw_cost,
            cost: 1,
            occupied: false,
        };
        t.set_cost(raw_cost, max_cost);
        t
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Cost charged for entering this tile.
    #[inline]
    pub fn move_cost(&self) -> i32 {
        self.cost
    }

    /// Cost as authored, before capping.
    #[inline]
    pub fn raw_move_cost(&self) -> i32 {
        self.raw_cost
    }

    /// Whether the authored cost was above the cap. Renderers flag these.
    #[inline]
    pub fn exceeds_cap(&self) -> bool {
        self.raw_cost > self.cost
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub(crate) fn set_cost(&mut self, raw_cost: i32, max_cost: i32) {
        self.raw_cost = raw_cost;
        self.cost = raw_cost.clamp(1, max_cost.max(1));
    }

    pub(crate) fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}
