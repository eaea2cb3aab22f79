use std::collections::BinaryHeap;

use skirmish_core::{Point, Range};

use crate::Planner;
use crate::pathers::WalkPather;
use crate::scratch::{SearchScratch, UNREACHABLE};
use crate::traits::AstarPather;

impl Planner<'_> {
    /// Compute the cheapest walking path from `from` to `to` using A*.
    ///
    /// Steps may be diagonal and cost the destination tile's movement cost,
    /// with no diagonal surcharge. Occupied tiles are never entered, so an
    /// occupied `to` is unreachable. Both endpoints are clamped onto the
    /// board.
    ///
    /// Returns the steps to take, excluding `from` and including `to`, or
    /// `None` if no path exists. When `from` and `to` clamp to the same tile
    /// the path is empty.
    pub fn find_path(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        let start = self.clamp_query(from, "path start");
        let goal = self.clamp_query(to, "path goal");
        if start == goal {
            return Some(Vec::new());
        }
        if self.grid.tile(goal).is_occupied() {
            log::debug!("no path {start} -> {goal}: goal occupied");
            return None;
        }
        let path = astar(&WalkPather::new(self.grid), self.grid.bounds(), start, goal);
        match &path {
            Some(steps) => log::trace!(
                "path {start} -> {goal}: {} steps, cost {}",
                steps.len(),
                self.path_cost(steps)
            ),
            None => log::debug!("no path {start} -> {goal}"),
        }
        path
    }

    /// Run the same A* search with a caller-supplied cost model.
    pub fn find_path_with<P: AstarPather>(
        &self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start = self.clamp_query(from, "path start");
        let goal = self.clamp_query(to, "path goal");
        astar(pather, self.grid.bounds(), start, goal)
    }

    /// Total movement cost of walking `path`: the sum of each entered tile's
    /// cost. This is what a caller deducts from the unit's budget.
    pub fn path_cost(&self, path: &[Point]) -> i32 {
        path.iter().fold(0i32, |acc, &p| acc.saturating_add(self.grid.tile(p).move_cost()))
    }
}

/// A* over `bounds`. Returns the steps after `from` up to and including
/// `to`, or `None` if `to` cannot be reached.
///
/// The estimate may overestimate (Manhattan on an 8-connected board), so the
/// first time the goal is popped its cost is only an upper bound. The search
/// keeps draining the open set, reopening improved tiles, until no open
/// entry is cheaper than the goal's best cost. Edge costs are positive, so
/// such an entry can never lead to a cheaper goal.
pub(crate) fn astar<P: AstarPather>(
    pather: &P,
    bounds: Range,
    from: Point,
    to: Point,
) -> Option<Vec<Point>> {
    let mut s = SearchScratch::new(bounds);
    let start_idx = s.idx(from)?;
    let goal_idx = s.idx(to)?;

    if start_idx == goal_idx {
        return Some(Vec::new());
    }

    {
        let node = &mut s.nodes[start_idx];
        node.g = 0;
        node.h = pather.estimate(from, to);
        node.open = true;
    }

    let mut open: BinaryHeap<_> = BinaryHeap::new();
    open.push(s.entry(start_idx));

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip entries superseded by a cheaper push or already expanded.
        let cn = &s.nodes[ci];
        if !cn.open || current.f != cn.g.saturating_add(cn.h) {
            continue;
        }
        let current_g = cn.g;
        s.nodes[ci].open = false;

        // The goal is never expanded, and nothing at least as costly as the
        // goal's best can improve it.
        let goal_g = s.nodes[goal_idx].g;
        if ci == goal_idx || current_g >= goal_g {
            continue;
        }

        let current_point = s.point(ci);

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = s.idx(np) else {
                continue;
            };
            let tentative_g = current_g.saturating_add(pather.cost(current_point, np));
            if tentative_g >= goal_g {
                continue;
            }

            let n = &mut s.nodes[ni];
            if tentative_g >= n.g {
                continue;
            }

            n.g = tentative_g;
            n.h = pather.estimate(np, to);
            n.parent = ci;
            n.open = true;

            let entry = s.entry(ni);
            open.push(entry);
        }
    }

    if s.nodes[goal_idx].g == UNREACHABLE {
        return None;
    }
    Some(s.retrace(goal_idx))
}
