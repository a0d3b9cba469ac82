//! The mobile agent: histories, target cursor, infection marker.
//!
//! # Invariants
//!
//! - `course` is never empty; its last entry is the agent's actual position.
//! - `targets[cursor - 1]` is the previous target (or the spawn point);
//!   `cursor <= targets.len()`, and when they are equal the model generates
//!   exactly one new waypoint before the agent can move.
//! - `infected_at`, once `Some`, never changes.

use bcast_core::{AgentId, AgentRng, Position, Round, SimConfig};

use crate::{AdvanceKind, MobilityModel, MobilityResult, WaypointContext};

/// Per-round travel budget of the continuous advance, in distance units.
const STEP_BUDGET: f64 = 1.0;

/// One mobile agent.
///
/// Owns its mobility model and RNG exclusively; nothing outside the agent
/// ever draws from its randomness, which is what makes per-agent waypoint
/// sequences independent of round-loop ordering.
pub struct Agent {
    id: AgentId,
    infected_at: Option<Round>,
    rng: AgentRng,
    model: MobilityModel,
    /// Position history; entry 0 is the spawn (or the post-truncation
    /// position), the last entry the current position.
    course: Vec<Position>,
    /// Waypoint history; entry 0 doubles as the initial "previous target".
    targets: Vec<Position>,
    /// Index into `targets` of the currently active target.
    cursor: usize,
}

impl Agent {
    /// Create the source agent at a caller-supplied spawn, optionally with a
    /// scripted waypoint prefix.  The source is informed from round 0 and
    /// freezes at its last scripted target once the script is exhausted.
    pub fn source(model: MobilityModel, spawn: Position, trace: &[Position], cfg: &SimConfig) -> Agent {
        let mut targets = Vec::with_capacity(1 + trace.len());
        targets.push(spawn);
        targets.extend_from_slice(trace);
        Agent {
            id: AgentId::SOURCE,
            infected_at: Some(Round::ZERO),
            rng: AgentRng::new(cfg.seed, AgentId::SOURCE),
            model,
            course: vec![spawn],
            targets,
            cursor: 1,
        }
    }

    /// Create a non-source agent; its spawn is drawn by the model and must
    /// not collide with the source's spawn.
    pub fn peer(
        id: AgentId,
        model: MobilityModel,
        source_spawn: Position,
        cfg: &SimConfig,
    ) -> MobilityResult<Agent> {
        let mut rng = AgentRng::new(cfg.seed, id);
        let spawn = model.spawn_position(&mut rng, source_spawn, cfg)?;
        Ok(Agent {
            id,
            infected_at: None,
            rng,
            model,
            course: vec![spawn],
            targets: vec![spawn],
            cursor: 1,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn model(&self) -> &MobilityModel {
        &self.model
    }

    /// The round this agent received the broadcast, if it has.
    #[inline]
    pub fn infected_at(&self) -> Option<Round> {
        self.infected_at
    }

    #[inline]
    pub fn is_informed(&self) -> bool {
        self.infected_at.is_some()
    }

    /// Current actual position (last course entry).
    #[inline]
    pub fn position(&self) -> Position {
        self.course[self.course.len() - 1]
    }

    /// Full position history, oldest first.
    pub fn course(&self) -> &[Position] {
        &self.course
    }

    /// Full waypoint history, oldest first.
    pub fn targets(&self) -> &[Position] {
        &self.targets
    }

    /// Index of the currently active target in [`targets`][Self::targets].
    pub fn target_cursor(&self) -> usize {
        self.cursor
    }

    /// The target already reached (or the spawn point).
    #[inline]
    pub fn prev_target(&self) -> Position {
        self.targets[self.cursor - 1]
    }

    // ── Infection ─────────────────────────────────────────────────────────

    /// Mark the agent informed at `round`.  A no-op (returning `false`) if it
    /// was already informed — the marker is set exactly once.
    pub fn mark_informed(&mut self, round: Round) -> bool {
        if self.infected_at.is_some() {
            return false;
        }
        self.infected_at = Some(round);
        true
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Make sure `targets[cursor]` exists, generating one waypoint if the
    /// cursor has run off the end.  The source re-appends its previous
    /// target instead, freezing at its last scripted position.
    fn ensure_target(&mut self, cfg: &SimConfig) -> MobilityResult<()> {
        if self.cursor < self.targets.len() {
            return Ok(());
        }
        let prev_target = self.targets[self.cursor - 1];
        if self.id.is_source() {
            self.targets.push(prev_target);
            return Ok(());
        }
        let position = self.position();
        let prev_cell = (self.course.len() >= 2).then(|| self.course[self.course.len() - 2]);
        let ctx = WaypointContext {
            prev_target,
            position,
            prev_cell,
        };
        let next = self.model.next_waypoint(&mut self.rng, &ctx, cfg)?;
        self.targets.push(next);
        Ok(())
    }

    /// Advance by one round, dispatching on the model's advance kind.
    pub fn advance(&mut self, cfg: &SimConfig) -> MobilityResult<()> {
        match self.model.advance_kind() {
            AdvanceKind::Continuous => self.advance_continuous(cfg),
            AdvanceKind::Discrete => self.advance_discrete(cfg),
        }
    }

    /// Spend a one-unit travel budget along the waypoint queue.
    ///
    /// Closely spaced waypoints may all be snapped through within a single
    /// round (each snap appends a course entry); the leftover budget moves
    /// the agent partway toward the next target.  A repeated target means
    /// the agent is frozen: it re-appends its position and stops.
    fn advance_continuous(&mut self, cfg: &SimConfig) -> MobilityResult<()> {
        let mut budget = STEP_BUDGET;
        while budget > 0.0 {
            self.ensure_target(cfg)?;
            let prev = self.targets[self.cursor - 1];
            let target = self.targets[self.cursor];
            if target == prev {
                self.course.push(target);
                return Ok(());
            }

            let pos = self.position();
            let dist = pos.distance(target);
            if budget >= dist {
                self.course.push(target);
                self.cursor += 1;
                budget -= dist;
            } else {
                self.course.push(pos.lerp(target, budget / dist));
                return Ok(());
            }
        }
        Ok(())
    }

    /// Consume exactly one waypoint: the hop to an adjacent cell always
    /// completes within the round.
    fn advance_discrete(&mut self, cfg: &SimConfig) -> MobilityResult<()> {
        self.ensure_target(cfg)?;
        let prev = self.targets[self.cursor - 1];
        let target = self.targets[self.cursor];
        if target != prev {
            self.cursor += 1;
        }
        self.course.push(target);
        Ok(())
    }

    // ── History truncation ────────────────────────────────────────────────

    /// Drop all history except the minimum needed to continue moving: the
    /// current position, and the previous + current targets.
    ///
    /// Called once after warm-up so open-ended walks don't accumulate
    /// unbounded history over a long propagation phase.  Generates the
    /// current target first so exactly two waypoint entries survive.
    pub fn truncate_history(&mut self, cfg: &SimConfig) -> MobilityResult<()> {
        self.ensure_target(cfg)?;
        self.course.drain(..self.course.len() - 1);
        self.targets.drain(..self.targets.len() - 2);
        self.cursor = 1;
        Ok(())
    }
}
