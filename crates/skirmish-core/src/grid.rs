//! The [`Grid`] type — a fixed W×H board of [`Tile`]s.
//!
//! Lookups through [`tile`](Grid::tile) clamp out-of-range coordinates onto
//! the border and never fail. Code that needs exact coordinates uses
//! [`try_tile`](Grid::try_tile) or the checked mutators, which report
//! [`GridError::OutOfBounds`].

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range, manhattan};
use crate::tile::Tile;

/// Layout rune for an open tile of cost 1.
pub const RUNE_OPEN: char = '.';
/// Layout rune for an occupied tile of cost 1 (a standing unit).
pub const RUNE_UNIT: char = '@';
/// Layout rune for an occupied tile at the cost cap (an obstacle).
pub const RUNE_BLOCK: char = '#';

/// A rectangular board of tiles, addressed by [`Point`] in `[0,W)×[0,H)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Range,
    max_move_cost: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a `width`×`height` grid using the default cost settings.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::with_config(GridConfig {
            width,
            height,
            ..GridConfig::default()
        })
    }

    /// Create a grid from a [`GridConfig`].
    pub fn with_config(cfg: GridConfig) -> Result<Self, GridError> {
        if cfg.width < 1 || cfg.height < 1 {
            return Err(GridError::InvalidSize {
                width: cfg.width,
                height: cfg.height,
            });
        }
        let bounds = Range::new(0, 0, cfg.width, cfg.height);
        let max = cfg.max_move_cost.max(1);
        let tiles = bounds
            .iter()
            .map(|p| Tile::new(p, cfg.default_move_cost, max))
            .collect();
        Ok(Self {
            bounds,
            max_move_cost: max,
            tiles,
        })
    }

    /// Parse an ASCII board, one row per line.
    ///
    /// | Rune | Tile |
    /// |---|---|
    /// | `.` | cost 1 |
    /// | `1`..`9` | that cost |
    /// | `@` | occupied, cost 1 |
    /// | `#` | occupied, cost at the cap |
    ///
    /// Leading and trailing blank lines and per-line surrounding whitespace
    /// are ignored.
    pub fn from_layout(layout: &str) -> Result<Self, GridError> {
        Self::from_layout_with(layout, GridConfig::default().max_move_cost)
    }

    /// Like [`from_layout`](Grid::from_layout) with an explicit cost cap.
    pub fn from_layout_with(layout: &str, max_move_cost: i32) -> Result<Self, GridError> {
        let rows: Vec<&str> = layout
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentLayout {
                    row,
                    expected: width,
                    found,
                });
            }
        }
        let mut grid = Self::with_config(GridConfig {
            width: width as i32,
            height: rows.len() as i32,
            max_move_cost,
            default_move_cost: 1,
        })?;
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let (cost, occupied) = match ch {
                    RUNE_OPEN => (1, false),
                    RUNE_UNIT => (1, true),
                    RUNE_BLOCK => (grid.max_move_cost, true),
                    '1'..='9' => (ch as i32 - '0' as i32, false),
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                };
                let max = grid.max_move_cost;
                let t = grid.tile_mut(pos);
                t.set_cost(cost, max);
                t.set_occupied(occupied);
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: a grid holds at least one tile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn max_move_cost(&self) -> i32 {
        self.max_move_cost
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Clamp x and y independently onto the board.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        self.bounds.clamp(p)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The tile at `p`, clamped onto the board. Never fails.
    pub fn tile(&self, p: Point) -> &Tile {
        let idx = self.clamped_index(p);
        &self.tiles[idx]
    }

    /// The tile at exactly `p`.
    pub fn try_tile(&self, p: Point) -> Result<&Tile, GridError> {
        let idx = self.checked_index(p)?;
        Ok(&self.tiles[idx])
    }

    /// Grid coordinate of a continuous position, before clamping.
    ///
    /// The board is centred on the world origin: each axis is offset by half
    /// the board extent and floored. 3D callers pass their ground-plane axes.
    pub fn world_to_point(&self, x: f32, y: f32) -> Point {
        let ox = self.width() as f32 / 2.0;
        let oy = self.height() as f32 / 2.0;
        Point::new((x + ox).floor() as i32, (y + oy).floor() as i32)
    }

    /// The tile under a continuous position, clamped onto the board.
    pub fn tile_at_world(&self, x: f32, y: f32) -> &Tile {
        self.tile(self.world_to_point(x, y))
    }

    /// World-space centre of the tile at `p`.
    pub fn world_center(&self, p: Point) -> (f32, f32) {
        let ox = self.width() as f32 / 2.0;
        let oy = self.height() as f32 / 2.0;
        (p.x as f32 - ox + 0.5, p.y as f32 - oy + 0.5)
    }

    /// In-bounds tiles of the 3×3 block around `p`, excluding `p`, in
    /// row-major order. With `include_diagonals` false the four corner tiles
    /// are skipped.
    pub fn neighbors(&self, p: Point, include_diagonals: bool) -> impl Iterator<Item = &Tile> + '_ {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(move |&(dx, dy)| {
                !(dx == 0 && dy == 0) && (include_diagonals || dx == 0 || dy == 0)
            })
            .filter_map(move |(dx, dy)| {
                let n = p.shift(dx, dy);
                self.bounds.index_of(n).map(|i| &self.tiles[i])
            })
    }

    /// Manhattan distance between two coordinates.
    #[inline]
    pub fn heuristic(&self, a: Point, b: Point) -> i32 {
        manhattan(a, b)
    }

    /// Row-major iterator over all tiles.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_occupied()).count()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Set the raw movement cost at `p`.
    pub fn set_move_cost(&mut self, p: Point, cost: i32) -> Result<(), GridError> {
        let idx = self.checked_index(p)?;
        let max = self.max_move_cost;
        self.tiles[idx].set_cost(cost, max);
        Ok(())
    }

    /// Mark or clear the unit standing on `p`.
    pub fn set_occupied(&mut self, p: Point, occupied: bool) -> Result<(), GridError> {
        let idx = self.checked_index(p)?;
        self.tiles[idx].set_occupied(occupied);
        Ok(())
    }

    /// Move occupancy from `from` to `to`. Leaves the grid untouched on error.
    pub fn relocate(&mut self, from: Point, to: Point) -> Result<(), GridError> {
        let fi = self.checked_index(from)?;
        let ti = self.checked_index(to)?;
        if fi == ti {
            return Ok(());
        }
        if self.tiles[ti].is_occupied() {
            return Err(GridError::Occupied(to));
        }
        self.tiles[fi].set_occupied(false);
        self.tiles[ti].set_occupied(true);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn tile_mut(&mut self, p: Point) -> &mut Tile {
        let idx = self.clamped_index(p);
        &mut self.tiles[idx]
    }

    #[inline]
    fn clamped_index(&self, p: Point) -> usize {
        let c = self.bounds.clamp(p);
        let w = self.bounds.width() as usize;
        c.y as usize * w + c.x as usize
    }

    #[inline]
    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points<'a>(it: impl Iterator<Item = &'a Tile>) -> Vec<Point> {
        it.map(Tile::pos).collect()
    }

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(7, 4).unwrap();
        assert_eq!(g.width(), 7);
        assert_eq!(g.height(), 4);
        assert_eq!(g.len(), 28);
        assert!(g.tiles().all(|t| t.move_cost() == 1 && !t.is_occupied()));
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn test_tile_clamps_each_axis() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.tile(Point::new(-3, 2)).pos(), Point::new(0, 2));
        assert_eq!(g.tile(Point::new(2, 99)).pos(), Point::new(2, 4));
        assert_eq!(g.tile(Point::new(8, -8)).pos(), Point::new(4, 0));
        assert_eq!(g.tile(Point::new(1, 3)).pos(), Point::new(1, 3));
    }

    #[test]
    fn test_try_tile_rejects_out_of_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert!(g.try_tile(Point::new(2, 2)).is_ok());
        assert_eq!(
            g.try_tile(Point::new(3, 0)),
            Err(GridError::OutOfBounds {
                pos: Point::new(3, 0),
                bounds: g.bounds()
            })
        );
    }

    #[test]
    fn test_world_conversion_centres_board() {
        let g = Grid::new(10, 6).unwrap();
        assert_eq!(g.world_to_point(0.0, 0.0), Point::new(5, 3));
        assert_eq!(g.world_to_point(-5.0, -3.0), Point::new(0, 0));
        assert_eq!(g.world_to_point(-0.1, 0.9), Point::new(4, 3));
        assert_eq!(g.tile_at_world(100.0, -100.0).pos(), Point::new(9, 0));
        for p in g.bounds() {
            let (x, y) = g.world_center(p);
            assert_eq!(g.world_to_point(x, y), p);
        }
    }

    #[test]
    fn test_neighbors_interior() {
        let g = Grid::new(5, 5).unwrap();
        let c = Point::new(2, 2);
        let all = points(g.neighbors(c, true));
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&c));
        let card = points(g.neighbors(c, false));
        assert_eq!(
            card,
            vec![
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(3, 2),
                Point::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_neighbors_corner_stays_in_bounds() {
        let g = Grid::new(5, 5).unwrap();
        let all = points(g.neighbors(Point::ZERO, true));
        assert_eq!(
            all,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        assert_eq!(g.neighbors(Point::ZERO, false).count(), 2);
    }

    #[test]
    fn test_neighbors_single_row() {
        let g = Grid::new(5, 1).unwrap();
        let all = points(g.neighbors(Point::new(2, 0), true));
        assert_eq!(all, vec![Point::new(1, 0), Point::new(3, 0)]);
    }

    #[test]
    fn test_heuristic_is_manhattan() {
        let g = Grid::new(2, 2).unwrap();
        assert_eq!(g.heuristic(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(g.heuristic(Point::new(1, 1), Point::new(0, 0)), 2);
    }

    #[test]
    fn test_set_cost_and_cap_flag() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_move_cost(Point::new(1, 1), 12).unwrap();
        let t = g.tile(Point::new(1, 1));
        assert_eq!(t.move_cost(), g.max_move_cost());
        assert!(t.exceeds_cap());
        assert!(g.set_move_cost(Point::new(5, 1), 2).is_err());
    }

    #[test]
    fn test_relocate() {
        let mut g = Grid::new(4, 4).unwrap();
        let a = Point::new(0, 0);
        let b = Point::new(3, 3);
        g.set_occupied(a, true).unwrap();
        g.set_occupied(Point::new(1, 1), true).unwrap();

        assert_eq!(
            g.relocate(a, Point::new(1, 1)),
            Err(GridError::Occupied(Point::new(1, 1)))
        );
        assert!(g.tile(a).is_occupied());

        g.relocate(a, b).unwrap();
        assert!(!g.tile(a).is_occupied());
        assert!(g.tile(b).is_occupied());
        assert_eq!(g.occupied_count(), 2);
    }

    #[test]
    fn test_from_layout() {
        let g = Grid::from_layout(
            "
            .3@
            #9.
            ",
        )
        .unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.tile(Point::new(1, 0)).move_cost(), 3);
        assert!(g.tile(Point::new(2, 0)).is_occupied());
        assert!(g.tile(Point::new(0, 1)).is_occupied());
        assert_eq!(g.tile(Point::new(0, 1)).move_cost(), g.max_move_cost());
        let rough = g.tile(Point::new(1, 1));
        assert_eq!(rough.raw_move_cost(), 9);
        assert!(rough.exceeds_cap());
    }

    #[test]
    fn test_from_layout_errors() {
        assert_eq!(
            Grid::from_layout("...\n.."),
            Err(GridError::InconsistentLayout {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_layout("..\n.x"),
            Err(GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
        assert!(matches!(
            Grid::from_layout("  \n "),
            Err(GridError::InvalidSize { .. })
        ));
    }
}
