//! Shared scenario and text rendering for the skirmish demo.
//!
//! Demonstrates: random terrain, movement and threat range, staging tile
//! selection and A* approach paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skirmish_core::{Grid, GridConfig, GridError, Point, TerrainConfig, TerrainGen, UnitStats};
use skirmish_paths::{Highlight, Planner, RangeResult};

pub const WIDTH: i32 = 16;
pub const HEIGHT: i32 = 10;

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// A generated board with one attacker and one target.
pub struct Scenario {
    pub grid: Grid,
    pub attacker: UnitStats,
    pub target: Point,
}

/// What the attacker should do this turn.
pub struct Plan {
    pub footprint: RangeResult,
    pub strike_in_place: bool,
    pub staging: Option<Point>,
    pub path: Option<Vec<Point>>,
    /// Movement spent walking `path`.
    pub path_cost: Option<i32>,
}

impl Scenario {
    /// Build a board from `seed`. The same seed always yields the same board.
    pub fn generate(seed: u64) -> Result<Self, GridError> {
        let grid = Grid::with_config(GridConfig {
            width: WIDTH,
            height: HEIGHT,
            ..GridConfig::default()
        })?;
        let attacker = UnitStats::new(Point::new(4, HEIGHT / 2), 6, 2);
        let target = Point::new(WIDTH - 5, HEIGHT / 2);

        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(seed));
        tg.scatter(&TerrainConfig::default(), &[attacker.pos, target]);
        let swamp = Point::new(
            tg.rng.random_range(0..WIDTH),
            tg.rng.random_range(0..HEIGHT),
        );
        tg.patch(swamp, 12, 3);

        let mut grid = tg.grid;
        grid.set_occupied(attacker.pos, true)?;
        grid.set_occupied(target, true)?;
        Ok(Self {
            grid,
            attacker,
            target,
        })
    }

    /// Run the engine for the attacker against the target.
    pub fn plan(&self) -> Plan {
        let planner = Planner::new(&self.grid);
        let footprint = planner.compute_range(
            self.attacker.pos,
            self.attacker.movement_left,
            self.attacker.attack_range,
        );
        let strike_in_place = self.attacker.can_strike(self.target);
        let staging = planner.closest_staging_tile(self.target, &self.attacker, &footprint);
        let path = staging.and_then(|s| planner.find_path(self.attacker.pos, s));
        let path_cost = path.as_deref().map(|p| planner.path_cost(p));
        Plan {
            footprint,
            strike_in_place,
            staging,
            path,
            path_cost,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the board, one line per row.
///
/// `A` attacker, `T` target, `S` staging tile, `*` path, `#` occupied,
/// `b`/`m`/`x` both/move/attack highlight, then terrain: `.` for cost 1,
/// the digit for higher costs and `!` for costs above the cap.
pub fn render(scenario: &Scenario, plan: &Plan) -> String {
    let grid = &scenario.grid;
    let path = plan.path.as_deref().unwrap_or(&[]);
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let t = grid.tile(p);
            let ch = if p == scenario.attacker.pos {
                'A'
            } else if p == scenario.target {
                'T'
            } else if plan.staging == Some(p) {
                'S'
            } else if path.contains(&p) {
                '*'
            } else if t.is_occupied() {
                '#'
            } else {
                match plan.footprint.highlight(p) {
                    Highlight::Both => 'b',
                    Highlight::Move => 'm',
                    Highlight::Attack => 'x',
                    Highlight::Clear if t.exceeds_cap() => '!',
                    Highlight::Clear if t.move_cost() == 1 => '.',
                    Highlight::Clear => char::from_digit(t.move_cost() as u32, 10).unwrap_or('?'),
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_is_deterministic() {
        let a = Scenario::generate(9).unwrap();
        let b = Scenario::generate(9).unwrap();
        assert_eq!(a.grid, b.grid);
        assert!(a.grid.tile(a.attacker.pos).is_occupied());
        assert!(a.grid.tile(a.target).is_occupied());
    }

    #[test]
    fn plan_staging_is_in_reach() {
        for seed in 0..20 {
            let s = Scenario::generate(seed).unwrap();
            let plan = s.plan();
            if let Some(st) = plan.staging {
                assert!(s.attacker.reaches_from(st, s.target));
                assert!(plan.footprint.in_move_range(st));
            }
            if let Some(path) = &plan.path {
                assert_eq!(path.last().copied(), plan.staging);
                let cost = plan.path_cost.unwrap();
                assert!(cost >= path.len() as i32);
                assert!(cost <= path.len() as i32 * s.grid.max_move_cost());
            } else {
                assert_eq!(plan.path_cost, None);
            }
        }
    }

    #[test]
    fn render_draws_every_tile() {
        let s = Scenario::generate(1).unwrap();
        let plan = s.plan();
        let text = render(&s, &plan);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT as usize);
        assert!(lines.iter().all(|l| l.chars().count() == WIDTH as usize));
        assert_eq!(text.matches('A').count(), 1);
        assert_eq!(text.matches('T').count(), 1);
    }
}
