//! `bcast-output` — result writers for the rust_bcast simulator.
//!
//! The CSV backend creates three files in the configured output directory:
//!
//! | File          | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | `courses.csv` | every recorded position of every agent, one row per step|
//! | `targets.csv` | every waypoint drawn by every agent                     |
//! | `rounds.csv`  | per-round informed totals (and neighbor fractions)      |
//!
//! Two ways to drive a writer:
//!
//! - [`export_run`] dumps a finished [`Simulation`](bcast_sim::Simulation) in
//!   one call, including the full per-agent courses.
//! - [`RunOutputObserver`] streams the round summaries while the run is in
//!   flight; attach it to `sim.run()` like any other
//!   [`RoundObserver`](bcast_sim::RoundObserver).
//!
//! # Usage
//!
//! ```rust,ignore
//! use bcast_output::{export_run, CsvWriter};
//!
//! let outcome = sim.run(&mut NoopObserver)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! export_run(&sim, &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_run;
pub use observer::RunOutputObserver;
pub use row::{CourseRow, RoundRow, TargetRow};
pub use writer::OutputWriter;
