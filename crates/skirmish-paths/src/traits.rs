use skirmish_core::Point;

/// Neighbor enumeration, the minimum any search needs.
pub trait Pather {
    /// Append the tiles a search may step to from `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather with a goal estimate for A*.
pub trait AstarPather: WeightedPather {
    /// Estimated remaining cost from `from` to `to`. The returned path is
    /// only guaranteed optimal when this never overestimates.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
