//! Reference searches and board fixtures shared by the unit tests.

use rand::SeedableRng;
use rand::rngs::StdRng;
use skirmish_core::{Grid, Point, Range, TerrainConfig, TerrainGen};

use crate::UNREACHABLE;
use crate::traits::WeightedPather;

/// A `w`×`h` board with rough terrain and obstacles rolled from `seed`.
pub(crate) fn random_board(seed: u64, w: i32, h: i32) -> Grid {
    let grid = Grid::new(w, h).expect("positive board size");
    let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(seed));
    let cfg = TerrainConfig {
        rough_pct: 0.35,
        max_cost: 7,
        blocker_pct: 0.2,
    };
    tg.scatter(&cfg, &[]);
    tg.grid
}

/// Exhaustive single-source minimal costs by repeated relaxation, indexed
/// like `bounds`. Slow and obviously correct.
pub(crate) fn reference_costs<P: WeightedPather>(pather: &P, bounds: Range, from: Point) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; bounds.len()];
    let Some(si) = bounds.index_of(from) else {
        return dist;
    };
    dist[si] = 0;
    let mut buf = Vec::new();
    loop {
        let mut changed = false;
        for p in bounds.iter() {
            let d = dist[bounds.index_of(p).unwrap()];
            if d == UNREACHABLE {
                continue;
            }
            buf.clear();
            pather.neighbors(p, &mut buf);
            for &n in &buf {
                let ni = bounds.index_of(n).unwrap();
                let nd = d.saturating_add(pather.cost(p, n));
                if nd < dist[ni] {
                    dist[ni] = nd;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}
