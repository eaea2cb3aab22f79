use skirmish_core::{Grid, MoveRules, Point};

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Entry point for all board queries.
///
/// A `Planner` borrows the board immutably and owns no search state: each
/// query allocates its own scratch. Callers update occupancy on the [`Grid`]
/// between queries, which the borrow checker keeps from overlapping with a
/// running search.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) rules: MoveRules,
}

impl<'g> Planner<'g> {
    /// Create a planner with default [`MoveRules`].
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_rules(grid, MoveRules::default())
    }

    pub fn with_rules(grid: &'g Grid, rules: MoveRules) -> Self {
        Self { grid, rules }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn rules(&self) -> MoveRules {
        self.rules
    }

    /// Clamp a query coordinate onto the board, noting when it moved.
    pub(crate) fn clamp_query(&self, p: Point, what: &str) -> Point {
        let c = self.grid.clamp(p);
        if c != p {
            log::debug!("{what} {p} outside {}, clamped to {c}", self.grid.bounds());
        }
        c
    }
}
