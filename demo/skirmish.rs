//! Text skirmish planner demo.
//!
//! Run: cargo run --bin skirmish [seed]

use skirmish_demo::{Scenario, render};

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 7,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: bad seed: {e}");
            std::process::exit(2);
        }
    };

    let scenario = match Scenario::generate(seed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let plan = scenario.plan();

    println!("seed {seed}");
    print!("{}", render(&scenario, &plan));
    println!(
        "attacker {} move {} reach {}, target {}",
        scenario.attacker.pos,
        scenario.attacker.movement_left,
        scenario.attacker.attack_range,
        scenario.target
    );
    println!(
        "{} tiles in move range, {} in attack range",
        plan.footprint.move_range().len(),
        plan.footprint.attack_range().len()
    );
    if plan.strike_in_place {
        println!("target already in reach: strike in place");
    }
    match (plan.staging, &plan.path, plan.path_cost) {
        (Some(s), Some(path), Some(cost)) => {
            println!("staging tile {s}, {} steps, cost {cost}", path.len());
        }
        (Some(s), _, _) => println!("staging tile {s} has no walking path"),
        (None, _, _) => println!("no staging tile this turn"),
    }
}
