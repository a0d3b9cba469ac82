//! Fluent builder for constructing a [`Simulation`].

use bcast_core::{AgentId, Position, SimConfig};
use bcast_mobility::{Agent, MobilityModel};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — domain, population, warm-up length, round cap, seed, …
/// - [`MobilityModel`] — the mobility strategy applied to every agent.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                   |
/// |-------------------|-------------------------------------------|
/// | `.source_spawn(p)`| `(0, 0)`                                  |
/// | `.source_trace(v)`| empty — the source never moves            |
/// | `.models(v)`      | the required model for all agents         |
///
/// Per-agent models let probability-grid groups reference different shared
/// grids, but every model in a run must belong to the same family (same
/// advance algorithm, same proximity metric) — mixing families would leave
/// the propagation engine without a single coherent notion of distance.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(cfg, MobilityModel::RandomWaypoint)
///     .source_spawn(Position::new(0.0, 0.0))
///     .source_trace(zigzag_trace())
///     .build()?;
/// let outcome = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    model:        MobilityModel,
    source_spawn: Position,
    source_trace: Vec<Position>,
    models:       Option<Vec<MobilityModel>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, model: MobilityModel) -> Self {
        Self {
            config,
            model,
            source_spawn: Position::new(0.0, 0.0),
            source_trace: Vec::new(),
            models: None,
        }
    }

    /// Where the source agent spawns (and stays, absent a trace).
    pub fn source_spawn(mut self, spawn: Position) -> Self {
        self.source_spawn = spawn;
        self
    }

    /// Scripted waypoint prefix for the source agent.  Once exhausted, the
    /// source freezes at the last scripted target.
    pub fn source_trace(mut self, trace: Vec<Position>) -> Self {
        self.source_trace = trace;
        self
    }

    /// Per-agent model assignment (must be length `agent_count`; element 0 is
    /// the source's).  Overrides the model given to [`new`][Self::new].
    pub fn models(mut self, models: Vec<MobilityModel>) -> Self {
        self.models = Some(models);
        self
    }

    /// Validate the configuration, spawn all agents, and return a
    /// ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        let agent_count = self.config.agent_count;

        let models = match self.models {
            Some(m) => {
                if m.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      m.len(),
                        what:     "mobility models",
                    });
                }
                m
            }
            None => vec![self.model; agent_count],
        };

        // All models must pair with one advance algorithm and one metric.
        let kind = models[0].advance_kind();
        let metric = models[0].metric();
        for m in &models[1..] {
            if m.advance_kind() != kind || m.metric() != metric {
                return Err(SimError::MixedFamilies(format!(
                    "{} does not pair with {}",
                    m.name(),
                    models[0].name()
                )));
            }
        }

        let mut agents = Vec::with_capacity(agent_count);
        let mut models = models.into_iter();
        // `models` is non-empty: agent_count >= 2 was just validated.
        let source_model = models.next().ok_or_else(|| {
            SimError::Config("no mobility model for the source agent".into())
        })?;
        agents.push(Agent::source(
            source_model,
            self.source_spawn,
            &self.source_trace,
            &self.config,
        ));
        for (i, model) in (1..).zip(models) {
            agents.push(Agent::peer(
                AgentId(i),
                model,
                self.source_spawn,
                &self.config,
            )?);
        }

        Ok(Simulation::new(self.config, metric, agents))
    }
}
