use skirmish_core::{Point, UnitStats, manhattan};

use crate::Planner;
use crate::range::RangeResult;

impl Planner<'_> {
    /// Pick the tile the attacker should move to before striking `target`.
    ///
    /// Candidates are the tiles of `footprint` (the attacker's movement
    /// range) that are currently unoccupied and from which `target` is
    /// within strike distance, i.e. Manhattan distance strictly below
    /// `attacker.attack_range`. Of those, the one closest to the attacker by
    /// Manhattan distance wins; ties go to the first in footprint order.
    pub fn closest_staging_tile(
        &self,
        target: Point,
        attacker: &UnitStats,
        footprint: &RangeResult,
    ) -> Option<Point> {
        let target = self.clamp_query(target, "strike target");
        let mut best: Option<(Point, i32)> = None;
        for node in footprint.move_range() {
            if self.grid.tile(node.pos).is_occupied() || !attacker.reaches_from(node.pos, target) {
                continue;
            }
            let d = manhattan(node.pos, attacker.pos);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((node.pos, d));
            }
        }
        if best.is_none() {
            log::trace!(
                "no staging tile for {} (reach {}) against {target}",
                attacker.pos,
                attacker.attack_range
            );
        }
        best.map(|(p, _)| p)
    }

    /// The walking path from the attacker to its staging tile against
    /// `target`, or `None` when there is no staging tile or no path to it.
    pub fn approach_path(
        &self,
        target: Point,
        attacker: &UnitStats,
        footprint: &RangeResult,
    ) -> Option<Vec<Point>> {
        let staging = self.closest_staging_tile(target, attacker, footprint)?;
        self.find_path(attacker.pos, staging)
    }
}
