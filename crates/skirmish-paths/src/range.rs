use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use skirmish_core::Point;

use crate::Planner;
use crate::pathers::{MovePather, ThreatPather};
use crate::scratch::{PathNode, SearchScratch};
use crate::traits::{Pather, WeightedPather};

/// How a renderer should mark a tile after a range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    Clear,
    Move,
    Attack,
    /// Reachable and threatened.
    Both,
}

/// Output of [`Planner::compute_range`].
///
/// The two partitions may overlap. The origin is in neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeResult {
    origin: Point,
    moves: Vec<PathNode>,
    attacks: Vec<Point>,
    move_costs: HashMap<Point, i32>,
    attack_set: HashSet<Point>,
}

impl RangeResult {
    fn new(origin: Point, moves: Vec<PathNode>, attacks: Vec<Point>) -> Self {
        let move_costs = moves.iter().map(|n| (n.pos, n.cost)).collect();
        let attack_set = attacks.iter().copied().collect();
        Self {
            origin,
            moves,
            attacks,
            move_costs,
            attack_set,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Reachable tiles with their cheapest cost, in nondecreasing cost order.
    #[inline]
    pub fn move_range(&self) -> &[PathNode] {
        &self.moves
    }

    /// Threatened tiles in discovery order.
    #[inline]
    pub fn attack_range(&self) -> &[Point] {
        &self.attacks
    }

    pub fn in_move_range(&self, p: Point) -> bool {
        self.move_costs.contains_key(&p)
    }

    pub fn in_attack_range(&self, p: Point) -> bool {
        self.attack_set.contains(&p)
    }

    /// Cheapest movement cost to `p`, if reachable.
    pub fn move_cost_at(&self, p: Point) -> Option<i32> {
        self.move_costs.get(&p).copied()
    }

    pub fn highlight(&self, p: Point) -> Highlight {
        match (self.in_move_range(p), self.in_attack_range(p)) {
            (true, true) => Highlight::Both,
            (true, false) => Highlight::Move,
            (false, true) => Highlight::Attack,
            (false, false) => Highlight::Clear,
        }
    }

    /// Union of both partitions without duplicates: move tiles first, then
    /// attack-only tiles.
    pub fn marked(&self) -> Vec<Point> {
        self.moves
            .iter()
            .map(|n| n.pos)
            .chain(
                self.attacks
                    .iter()
                    .copied()
                    .filter(|p| !self.move_costs.contains_key(p)),
            )
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.attacks.is_empty()
    }
}

impl Planner<'_> {
    /// Compute movement and attack range for a unit standing on `origin`.
    ///
    /// Movement is a cost-bounded flood fill over 8 directions: entering a
    /// tile costs its movement cost, plus the diagonal surcharge on diagonal
    /// steps. Occupied tiles are neither entered nor crossed, except the
    /// origin itself, which is always expanded.
    ///
    /// Attack range spreads from the origin and from every reachable tile by
    /// up to `attack_budget` cardinal hops, each source with its own visited
    /// set. Terrain and occupancy do not stop it.
    ///
    /// Budgets of zero or less yield empty partitions.
    pub fn compute_range(&self, origin: Point, move_budget: i32, attack_budget: i32) -> RangeResult {
        let origin = self.clamp_query(origin, "range origin");
        let moves = self.movement_flood(origin, move_budget);
        let attacks = self.threat_spread(origin, &moves, attack_budget);
        log::trace!(
            "range from {origin} (move {move_budget}, attack {attack_budget}): {} move, {} attack",
            moves.len(),
            attacks.len()
        );
        RangeResult::new(origin, moves, attacks)
    }

    /// Dijkstra expansion from `origin`, stopping once the cumulative cost
    /// exceeds `budget`. Returns every reached tile except the origin.
    fn movement_flood(&self, origin: Point, budget: i32) -> Vec<PathNode> {
        let mut results = Vec::new();
        if budget <= 0 {
            return results;
        }
        let pather = MovePather::new(self.grid, self.rules.diagonal_surcharge);
        let mut s = SearchScratch::new(self.grid.bounds());
        let Some(oi) = s.idx(origin) else {
            return results;
        };

        s.nodes[oi].g = 0;
        s.nodes[oi].open = true;
        let mut open: BinaryHeap<_> = BinaryHeap::new();
        open.push(s.entry(oi));

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &s.nodes[ci];
            if !cn.open || current.f != cn.g {
                continue;
            }
            let current_g = cn.g;
            s.nodes[ci].open = false;

            let cp = s.point(ci);
            if ci != oi {
                results.push(PathNode {
                    pos: cp,
                    cost: current_g,
                });
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = s.idx(np) else {
                    continue;
                };
                let tentative = current_g.saturating_add(pather.cost(cp, np));
                if tentative > budget {
                    continue;
                }

                let n = &mut s.nodes[ni];
                if tentative >= n.g {
                    continue;
                }
                n.g = tentative;
                n.parent = ci;
                n.open = true;

                let entry = s.entry(ni);
                open.push(entry);
            }
        }

        results
    }

    /// Breadth-first threat spread from the origin and each move tile.
    fn threat_spread(&self, origin: Point, moves: &[PathNode], budget: i32) -> Vec<Point> {
        let mut attacks = Vec::new();
        if budget <= 0 {
            return attacks;
        }
        let pather = ThreatPather::new(self.grid);
        let bounds = self.grid.bounds();
        let len = bounds.len();

        let mut recorded = vec![false; len];
        if let Some(oi) = bounds.index_of(origin) {
            // The origin is never reported.
            recorded[oi] = true;
        }

        let mut visited = vec![false; len];
        let mut touched: Vec<usize> = Vec::new();
        let mut queue: VecDeque<(Point, i32)> = VecDeque::new();
        let mut nbuf = Vec::with_capacity(4);

        let sources = std::iter::once(origin).chain(moves.iter().map(|n| n.pos));
        for src in sources {
            let Some(si) = bounds.index_of(src) else {
                continue;
            };
            // Fresh visited set for this source.
            for i in touched.drain(..) {
                visited[i] = false;
            }
            visited[si] = true;
            touched.push(si);
            queue.clear();
            queue.push_back((src, 0));

            while let Some((cp, dist)) = queue.pop_front() {
                let nd = dist + 1;
                if nd > budget {
                    continue;
                }
                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);
                for &np in nbuf.iter() {
                    let Some(ni) = bounds.index_of(np) else {
                        continue;
                    };
                    if visited[ni] {
                        continue;
                    }
                    visited[ni] = true;
                    touched.push(ni);
                    if !recorded[ni] {
                        recorded[ni] = true;
                        attacks.push(np);
                    }
                    queue.push_back((np, nd));
                }
            }
        }

        attacks
    }
}
