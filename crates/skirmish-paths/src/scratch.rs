use skirmish_core::{Point, Range};

/// A position with an associated cost, returned from range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "not reached" in search records.
pub const UNREACHABLE: i32 = i32::MAX;

/// Marks the absence of a parent link.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-tile search record
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            parent: NO_PARENT,
            open: false,
        }
    }
}

/// Reference into the node array for use in `BinaryHeap`.
///
/// Pops smallest `f` first, then smallest `h`, then the earliest pushed.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchScratch
// ---------------------------------------------------------------------------

/// Search records for one query, one [`Node`] per board tile.
///
/// Every query builds its own scratch and drops it on return, so no state
/// leaks between searches and concurrent queries over a shared board are
/// safe.
pub(crate) struct SearchScratch {
    rng: Range,
    pub(crate) nodes: Vec<Node>,
    seq: u32,
}

impl SearchScratch {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            seq: 0,
        }
    }

    /// Flat index of `p`, or `None` if outside the board.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }

    /// Heap entry for node `idx` with its current costs.
    pub(crate) fn entry(&mut self, idx: usize) -> NodeRef {
        let n = &self.nodes[idx];
        let r = NodeRef {
            idx,
            f: n.g.saturating_add(n.h),
            h: n.h,
            seq: self.seq,
        };
        self.seq = self.seq.wrapping_add(1);
        r
    }

    /// Follow parent links from `goal` back to (but excluding) the root.
    pub(crate) fn retrace(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while self.nodes[ci].parent != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::Highlight;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn highlight_round_trip() {
        for h in [Highlight::Clear, Highlight::Move, Highlight::Attack, Highlight::Both] {
            let json = serde_json::to_string(&h).unwrap();
            let back: Highlight = serde_json::from_str(&json).unwrap();
            assert_eq!(h, back);
        }
    }
}
