//! Run configuration.
//!
//! Everything that was a module-wide constant in ad-hoc propagation scripts
//! (domain size, agent count, round cap, warm-up length) is collected here
//! into one explicit value threaded through the builder to every mobility
//! model and metric.

use crate::{BcastError, BcastResult};

/// Top-level simulation configuration.
///
/// Construct with [`SimConfig::new`] and adjust fields directly; the builder
/// calls [`validate`][SimConfig::validate] before any agent is created, so a
/// degenerate configuration is rejected up front rather than mid-run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Domain width (`X_MAX`).  Grid-walk models treat this as the highest
    /// reachable integer column.
    pub width: f64,

    /// Domain height (`Y_MAX`).
    pub height: f64,

    /// Total number of agents including the source.  Must be at least 2 —
    /// a lone source has no possible recipient.
    pub agent_count: usize,

    /// Agents within this distance of an informed agent become informed.
    pub broadcast_range: f64,

    /// Movement-only rounds before propagation begins.  The source does not
    /// move during warm-up.
    pub warmup_rounds: u32,

    /// Maximum number of propagation rounds before a run is declared timed
    /// out (unless `allow_exceeding_cap` is set).
    pub round_cap: u32,

    /// When `true`, the round cap is advisory and the run continues until
    /// full propagation.
    pub allow_exceeding_cap: bool,

    /// Master RNG seed.  The same seed always produces identical histories.
    pub seed: u64,

    /// Record the per-round average neighbor fraction.  Off by default —
    /// it costs an O(N²) scan every round.
    pub record_neighbor_fraction: bool,
}

impl SimConfig {
    /// A configuration with the defaults the original experiments used:
    /// broadcast range 1, 100 warm-up rounds, a 100 000-round hard cap, and
    /// no neighbor-fraction recording.
    pub fn new(width: f64, height: f64, agent_count: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            agent_count,
            broadcast_range: 1.0,
            warmup_rounds: 100,
            round_cap: 100_000,
            allow_exceeding_cap: false,
            seed,
            record_neighbor_fraction: false,
        }
    }

    /// Reject degenerate configurations.
    ///
    /// Fatal at construction time: a non-positive domain, a population that
    /// cannot propagate, or a zero round cap would otherwise only surface as
    /// a hang or an empty run.
    pub fn validate(&self) -> BcastResult<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(BcastError::Config(format!(
                "domain must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        if self.agent_count < 2 {
            return Err(BcastError::Config(format!(
                "need at least 2 agents (one source, one receiver), got {}",
                self.agent_count
            )));
        }
        if !(self.broadcast_range > 0.0) {
            return Err(BcastError::Config(format!(
                "broadcast range must be positive, got {}",
                self.broadcast_range
            )));
        }
        if self.round_cap == 0 {
            return Err(BcastError::Config("round cap must be positive".into()));
        }
        Ok(())
    }
}
