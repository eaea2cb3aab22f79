//! Per-unit query parameters.

use crate::geom::{Point, manhattan};

/// The slice of a unit's state the engine reads. Callers own the unit and
/// apply movement and attack bookkeeping themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub pos: Point,
    /// Movement budget left this turn.
    pub movement_left: i32,
    /// Strike distance. A target is in reach when its Manhattan distance is
    /// strictly below this value.
    pub attack_range: i32,
    pub attacks_left: i32,
}

impl UnitStats {
    pub fn new(pos: Point, movement_left: i32, attack_range: i32) -> Self {
        Self {
            pos,
            movement_left: movement_left.max(0),
            attack_range: attack_range.max(0),
            attacks_left: 1,
        }
    }

    /// Builder for the remaining attack count.
    pub fn with_attacks(mut self, attacks_left: i32) -> Self {
        self.attacks_left = attacks_left;
        self
    }

    /// Whether a strike from `from` would reach `target`.
    #[inline]
    pub fn reaches_from(&self, from: Point, target: Point) -> bool {
        manhattan(from, target) < self.attack_range
    }

    /// Whether the unit can strike `target` without moving.
    pub fn can_strike(&self, target: Point) -> bool {
        self.attacks_left > 0 && self.reaches_from(self.pos, target)
    }
}
