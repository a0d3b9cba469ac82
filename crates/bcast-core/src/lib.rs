//! `bcast-core` — foundational types for the `rust_bcast` broadcast
//! propagation simulator.
//!
//! This crate is a dependency of every other `bcast-*` crate.  It
//! intentionally has no `bcast-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`agent_id`]| `AgentId` — agent identity, source distinguished     |
//! | [`pos`]     | `Position` — planar coordinate pair                  |
//! | [`round`]   | `Round` — discrete simulation round counter          |
//! | [`metric`]  | `Proximity` — bounded-plane / toroidal distance      |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (run-level)         |
//! | [`config`]  | `SimConfig` — all global tunables in one value       |
//! | [`error`]   | `BcastError`, `BcastResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod agent_id;
pub mod config;
pub mod error;
pub mod metric;
pub mod pos;
pub mod rng;
pub mod round;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent_id::AgentId;
pub use config::SimConfig;
pub use error::{BcastError, BcastResult};
pub use metric::Proximity;
pub use pos::Position;
pub use rng::{AgentRng, SimRng};
pub use round::Round;
