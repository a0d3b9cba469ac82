//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (agent_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent indices uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state (no draw-ordering dependency between
//!   agents: reordering the round loop cannot change any agent's waypoints).
//! - Identical `(run_seed, agent_index)` always reproduces the identical
//!   waypoint sequence, which is what makes whole runs bit-reproducible.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Created once per agent at simulation init and owned by that agent for the
/// whole run; never shared.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's seed and an agent identity.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Weighted choice over a candidate slice.
    ///
    /// Zero weights are legal (the candidate is simply never picked); returns
    /// `None` only if the slices are empty, mismatched, or all weights are
    /// zero.
    pub fn choose_weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T> {
        if items.is_empty() || items.len() != weights.len() {
            return None;
        }
        let dist = WeightedIndex::new(weights).ok()?;
        Some(&items[dist.sample(&mut self.0)])
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for operations outside any single agent — chiefly deriving
/// per-trial seeds in a Monte-Carlo batch.
///
/// Used only in single-threaded contexts.  For parallel trials, derive one
/// seed per trial up front and hand each worker its own value.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child seed with a different offset — used to seed independent
    /// trial runs deterministically from one root seed.
    pub fn child_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
