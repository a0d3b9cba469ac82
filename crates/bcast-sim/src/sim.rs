//! The `Simulation` struct and its round loop.

use std::fmt;

use bcast_core::{Position, Proximity, Round, SimConfig};
use bcast_mobility::Agent;

use crate::{RoundObserver, SimResult};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// How a run ended.
///
/// `rounds` is the number of propagation rounds executed (the round-0
/// snapshot is not counted).  A timed-out trial is a normal, reportable
/// outcome — the driver decides whether to keep or discard it — and is kept
/// distinguishable here instead of being folded into a sentinel round count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every agent was informed after `rounds` rounds.
    FullyInformed { rounds: u32 },
    /// The round cap was hit with `informed` of the agents reached.
    TimedOut { rounds: u32, informed: u32 },
}

impl Outcome {
    /// Propagation rounds executed, regardless of how the run ended.
    pub fn rounds(&self) -> u32 {
        match *self {
            Outcome::FullyInformed { rounds } | Outcome::TimedOut { rounds, .. } => rounds,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Outcome::FullyInformed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::FullyInformed { rounds } => {
                write!(f, "fully informed after {rounds} rounds")
            }
            Outcome::TimedOut { rounds, informed } => {
                write!(f, "timed out after {rounds} rounds with {informed} informed")
            }
        }
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// One independent broadcast-propagation run.
///
/// Owns the agents (source at index 0), the proximity metric paired with
/// their mobility family, and the recorded per-round series.  Construct via
/// [`SimBuilder`][crate::SimBuilder]; drive with [`run`][Self::run]; read the
/// recorded histories back through the accessors afterwards.
pub struct Simulation {
    config: SimConfig,
    metric: Proximity,
    agents: Vec<Agent>,
    /// Number of informed agents after each round; entry 0 is the post-warm-up
    /// snapshot (always 1 — just the source).
    informed_series: Vec<u32>,
    /// Average neighbor fraction per round; empty unless
    /// `config.record_neighbor_fraction` is set.
    neighbor_series: Vec<f64>,
}

impl Simulation {
    pub(crate) fn new(config: SimConfig, metric: Proximity, agents: Vec<Agent>) -> Self {
        Self {
            config,
            metric,
            agents,
            informed_series: Vec::new(),
            neighbor_series: Vec::new(),
        }
    }

    // ── Read-only access for drivers and rendering tools ──────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn metric(&self) -> Proximity {
        self.metric
    }

    /// All agents, source first.  Histories and infection markers are
    /// readable through [`Agent`]'s accessors; nothing here is mutable from
    /// outside.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Informed-agent totals per round, entry 0 = post-warm-up snapshot.
    pub fn informed_series(&self) -> &[u32] {
        &self.informed_series
    }

    /// Average neighbor-fraction per round (empty when recording is off).
    pub fn neighbor_series(&self) -> &[f64] {
        &self.neighbor_series
    }

    // ── Round loop ────────────────────────────────────────────────────────

    /// Run warm-up, truncation, and the propagation loop to completion.
    ///
    /// Returns the run's [`Outcome`]; all recorded series and histories stay
    /// available on `self` afterwards.
    pub fn run<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<Outcome> {
        self.warm_up()?;
        observer.on_warmup_end();
        self.record_round();

        let total = self.agents.len() as u32;
        let mut round = Round(1);
        let outcome = loop {
            if self.informed_count() == total {
                break Outcome::FullyInformed {
                    rounds: self.rounds_recorded(),
                };
            }

            for agent in &mut self.agents {
                agent.advance(&self.config)?;
            }
            self.propagate(round);
            self.record_round();
            observer.on_round_end(round, self.informed_count());

            if !self.config.allow_exceeding_cap && round.0 == self.config.round_cap {
                let informed = self.informed_count();
                if informed != total {
                    break Outcome::TimedOut {
                        rounds: self.rounds_recorded(),
                        informed,
                    };
                }
            }
            round = round.next();
        };

        observer.on_run_end(&outcome);
        Ok(outcome)
    }

    /// Movement-only settling rounds: every agent except the source walks its
    /// stochastic process toward its stationary spatial distribution, then
    /// sheds the accumulated history.
    fn warm_up(&mut self) -> SimResult<()> {
        for _ in 0..self.config.warmup_rounds {
            for agent in &mut self.agents[1..] {
                agent.advance(&self.config)?;
            }
        }
        for agent in &mut self.agents[1..] {
            agent.truncate_history(&self.config)?;
        }
        Ok(())
    }

    /// Infection check for round `round`.
    ///
    /// The informed positions are snapshotted first, so an agent informed
    /// *this* round never relays within the same round.  First qualifying
    /// informed neighbor wins; order among them is immaterial since only
    /// "any within range" matters.
    fn propagate(&mut self, round: Round) {
        let informed_positions: Vec<Position> = self
            .agents
            .iter()
            .filter(|a| a.is_informed())
            .map(|a| a.position())
            .collect();

        let SimConfig {
            width,
            height,
            broadcast_range,
            ..
        } = self.config;
        let metric = self.metric;

        for agent in self.agents.iter_mut().filter(|a| !a.is_informed()) {
            let pos = agent.position();
            let in_range = informed_positions
                .iter()
                .any(|&p| metric.distance(p, pos, width, height) <= broadcast_range);
            if in_range {
                agent.mark_informed(round);
            }
        }
    }

    fn informed_count(&self) -> u32 {
        match self.informed_series.last() {
            Some(&n) => n,
            None => 0,
        }
    }

    /// Propagation rounds recorded so far (series length minus the round-0
    /// snapshot).
    fn rounds_recorded(&self) -> u32 {
        (self.informed_series.len() - 1) as u32
    }

    fn record_round(&mut self) {
        let informed = self.agents.iter().filter(|a| a.is_informed()).count() as u32;
        self.informed_series.push(informed);
        if self.config.record_neighbor_fraction {
            let fraction = self.average_neighbor_fraction();
            self.neighbor_series.push(fraction);
        }
    }

    /// Mean over agents of (fraction of the population within broadcast
    /// range, self excluded).  O(N²) — only computed when recording is on.
    fn average_neighbor_fraction(&self) -> f64 {
        let n = self.agents.len();
        let positions: Vec<Position> = self.agents.iter().map(|a| a.position()).collect();
        let SimConfig {
            width,
            height,
            broadcast_range,
            ..
        } = self.config;

        let sum: f64 = positions
            .iter()
            .map(|&a| {
                let neighbors = positions
                    .iter()
                    .filter(|&&b| self.metric.distance(a, b, width, height) <= broadcast_range)
                    .count()
                    - 1; // the agent itself always qualifies
                neighbors as f64 / n as f64
            })
            .sum();
        sum / n as f64
    }
}
