//! **skirmish-core** — board model for tile-grid tactics.
//!
//! This crate provides the data side of the *skirmish* engine: geometry
//! primitives, weighted and occupiable [`Tile`]s, the clamping [`Grid`], unit
//! query parameters, configuration and random terrain. Searches over the
//! board live in `skirmish-paths`.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;
pub mod tile;
pub mod unit;

pub use config::{DEFAULT_MAX_MOVE_COST, GridConfig, MoveRules, TerrainConfig};
pub use error::GridError;
pub use geom::{Point, Range, RangeIter, manhattan};
pub use grid::Grid;
pub use terrain::TerrainGen;
pub use tile::Tile;
pub use unit::UnitStats;
