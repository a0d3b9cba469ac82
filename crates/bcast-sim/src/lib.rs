//! `bcast-sim` — round loop orchestrator for the rust_bcast simulator.
//!
//! # Run structure
//!
//! ```text
//! warm-up:   warmup_rounds × move every agent except the source
//! truncate:  every non-source agent keeps only (current position,
//!            previous target, current target)
//! round 0:   informed-count snapshot (just the source)
//! for r in 1.. :
//!   ① Move      — advance every agent one round (source included; it
//!                 follows its scripted trace or stays frozen).
//!   ② Propagate — snapshot the informed agents' positions, then mark
//!                 every uninformed agent within broadcast range of any
//!                 of them as informed at round r.
//!   ③ Record    — append the informed-agent total (and, optionally, the
//!                 average neighbor fraction) to the per-round series.
//!   ④ Stop      — all agents informed, or round cap hit (unless the cap
//!                 is advisory).
//! ```
//!
//! A run is strictly single-threaded and runs to completion; parallelism
//! belongs at the trial level, where many independent `Simulation` values
//! with private state can run concurrently without coordination.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bcast_core::SimConfig;
//! use bcast_mobility::MobilityModel;
//! use bcast_sim::{NoopObserver, SimBuilder};
//!
//! let cfg = SimConfig::new(50.0, 50.0, 25, 42);
//! let mut sim = SimBuilder::new(cfg, MobilityModel::RandomWaypoint).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! println!("{outcome}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RoundObserver};
pub use sim::{Outcome, Simulation};
