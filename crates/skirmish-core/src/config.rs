//! Tunables for boards, movement rules and terrain generation.

/// Default cap on the per-tile movement cost.
pub const DEFAULT_MAX_MOVE_COST: i32 = 5;

/// Board dimensions and cost limits used by [`Grid::with_config`](crate::Grid::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Highest cost any search charges for entering a tile. Raw costs above
    /// it are kept but flagged.
    pub max_move_cost: i32,
    /// Cost given to every tile on construction.
    pub default_move_cost: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            max_move_cost: DEFAULT_MAX_MOVE_COST,
            default_move_cost: 1,
        }
    }
}

/// Cost rules for the movement flood fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveRules {
    /// Extra cost added to a diagonal step when computing movement range.
    /// Path search does not apply it.
    pub diagonal_surcharge: i32,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self {
            diagonal_surcharge: 1,
        }
    }
}

/// Parameters for [`TerrainGen`](crate::TerrainGen).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainConfig {
    /// Chance in `[0, 1]` that a tile becomes rough terrain.
    pub rough_pct: f64,
    /// Highest raw cost rolled for rough terrain. May exceed the grid cap.
    pub max_cost: i32,
    /// Chance in `[0, 1]` that a tile is occupied by an obstacle.
    pub blocker_pct: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            rough_pct: 0.25,
            max_cost: DEFAULT_MAX_MOVE_COST + 2,
            blocker_pct: 0.08,
        }
    }
}
