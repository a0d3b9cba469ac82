//! rwp — single random-waypoint run for the rust_bcast simulator.
//!
//! 25 agents roam a 50×50 plane; the source sits at the origin and
//! broadcasts to everyone who comes within unit range.  The run ends
//! when the last agent is informed, and the full result (courses,
//! waypoints, round series) lands in `output/rwp/` as CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use bcast_core::{Position, Round, SimConfig};
use bcast_mobility::MobilityModel;
use bcast_output::{export_run, CsvWriter};
use bcast_sim::{Outcome, RoundObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const X_MAX:          f64   = 50.0;
const Y_MAX:          f64   = 50.0;
const AGENT_COUNT:    usize = 25;
const SEED:           u64   = 42;
const PROGRESS_EVERY: u32   = 500;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressObserver;

impl RoundObserver for ProgressObserver {
    fn on_warmup_end(&mut self) {
        println!("warm-up complete");
    }

    fn on_round_end(&mut self, round: Round, informed: u32) {
        if round.0 % PROGRESS_EVERY == 0 {
            println!("  {round}: {informed}/{AGENT_COUNT} informed");
        }
    }

    fn on_run_end(&mut self, outcome: &Outcome) {
        println!("{outcome}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== rwp — rust_bcast broadcast propagation ===");
    println!("Domain: {X_MAX}×{Y_MAX}  |  Agents: {AGENT_COUNT}  |  Seed: {SEED}");
    println!();

    let mut config = SimConfig::new(X_MAX, Y_MAX, AGENT_COUNT, SEED);
    config.allow_exceeding_cap = true;
    config.record_neighbor_fraction = true;

    let mut sim = SimBuilder::new(config, MobilityModel::RandomWaypoint)
        .source_spawn(Position::new(0.0, 0.0))
        .build()?;

    let t0 = Instant::now();
    let outcome = sim.run(&mut ProgressObserver)?;
    let elapsed = t0.elapsed();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    std::fs::create_dir_all("output/rwp")?;
    let mut writer = CsvWriter::new(Path::new("output/rwp"))?;
    export_run(&sim, &mut writer)?;
    println!("CSV written to output/rwp/");
    println!();

    // Per-agent infection table.
    println!("{:<12} {:<10}", "Agent", "Informed at");
    println!("{}", "-".repeat(24));
    for agent in sim.agents() {
        let at = agent
            .infected_at()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "never".into());
        println!("{:<12} {:<10}", agent.id().0, at);
    }
    println!();
    println!("Total rounds: {}", outcome.rounds());

    Ok(())
}
