//! Random terrain for boards.
//!
//! - **Scatter**: each tile independently rolls for rough terrain and for an
//!   obstacle.
//! - **Patches**: random walks that lay a fixed cost along their trail,
//!   producing connected swamps or forests.

use rand::Rng;

use crate::config::TerrainConfig;
use crate::geom::Point;
use crate::grid::Grid;

/// Terrain generator operating on a [`Grid`].
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> TerrainGen<R> {
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Roll rough terrain and obstacles for every tile not listed in
    /// `keep_clear`. Rough tiles get a raw cost in `2..=cfg.max_cost`, which
    /// may exceed the grid's cap.
    ///
    /// Returns `(rough, blocked)` tile counts.
    pub fn scatter(&mut self, cfg: &TerrainConfig, keep_clear: &[Point]) -> (usize, usize) {
        let mut rough = 0;
        let mut blocked = 0;
        let max_cost = cfg.max_cost.max(2);
        for p in self.grid.bounds().iter() {
            if keep_clear.contains(&p) {
                continue;
            }
            if self.rng.random::<f64>() < cfg.rough_pct {
                let cost = self.rng.random_range(2..=max_cost);
                // In bounds by construction.
                if self.grid.set_move_cost(p, cost).is_ok() {
                    rough += 1;
                }
            }
            let block = self.rng.random::<f64>() < cfg.blocker_pct;
            if block && self.grid.set_occupied(p, true).is_ok() {
                blocked += 1;
            }
        }
        log::debug!(
            "terrain scatter on {}x{}: {rough} rough, {blocked} blocked",
            self.grid.width(),
            self.grid.height()
        );
        (rough, blocked)
    }

    /// Walk `steps` random cardinal steps from `start`, setting every visited
    /// tile's cost to `cost`. Steps that would leave the board stay put.
    ///
    /// Returns the number of distinct tiles changed.
    pub fn patch(&mut self, start: Point, steps: usize, cost: i32) -> usize {
        let mut pos = self.grid.clamp(start);
        let mut changed = 0;
        for _ in 0..=steps {
            if self.grid.tile(pos).raw_move_cost() != cost && self.grid.set_move_cost(pos, cost).is_ok() {
                changed += 1;
            }
            let next = pos.neighbors_4()[self.rng.random_range(0..4usize)];
            if self.grid.contains(next) {
                pos = next;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter_respects_keep_clear() {
        let grid = Grid::new(20, 20).unwrap();
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(7));
        let keep = [Point::new(0, 0), Point::new(19, 19)];
        let cfg = TerrainConfig {
            rough_pct: 1.0,
            max_cost: 9,
            blocker_pct: 1.0,
        };
        let (rough, blocked) = tg.scatter(&cfg, &keep);
        assert_eq!(rough, 398);
        assert_eq!(blocked, 398);
        for p in keep {
            let t = tg.grid.tile(p);
            assert!(!t.is_occupied());
            assert_eq!(t.raw_move_cost(), 1);
        }
    }

    #[test]
    fn test_scatter_costs_in_range() {
        let grid = Grid::new(30, 30).unwrap();
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(42));
        let cfg = TerrainConfig::default();
        let (rough, _) = tg.scatter(&cfg, &[]);
        assert!(rough > 0);
        assert!(tg.grid.tiles().all(|t| (1..=cfg.max_cost).contains(&t.raw_move_cost())));
        assert!(
            tg.grid
                .tiles()
                .all(|t| t.move_cost() <= tg.grid.max_move_cost())
        );
    }

    #[test]
    fn test_patch_marks_trail() {
        let grid = Grid::new(10, 10).unwrap();
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(3));
        let changed = tg.patch(Point::new(5, 5), 25, 3);
        assert!(changed >= 1);
        assert_eq!(tg.grid.tile(Point::new(5, 5)).raw_move_cost(), 3);
        let count = tg.grid.tiles().filter(|t| t.raw_move_cost() == 3).count();
        assert_eq!(count, changed);
    }
}
