//! The closed family of mobility models.
//!
//! Each variant is one stochastic waypoint-generation strategy.  The family
//! is a tagged enum rather than a trait object: the set is closed, every
//! variant is `Clone` (probability grids are shared by `Arc`), and the
//! propagation engine stays agnostic to which variant is active.
//!
//! A model answers three questions:
//!
//! - where does an agent spawn ([`spawn_position`][MobilityModel::spawn_position]),
//! - what is the next waypoint once the current one is exhausted
//!   ([`next_waypoint`][MobilityModel::next_waypoint]),
//! - which advance algorithm and proximity metric pair with it
//!   ([`advance_kind`][MobilityModel::advance_kind],
//!   [`metric`][MobilityModel::metric]).
//!
//! The source agent never reaches `next_waypoint` — its freeze-in-place rule
//! is handled uniformly in [`Agent`][crate::Agent] before dispatch.

use std::sync::Arc;

use bcast_core::{AgentRng, Position, Proximity, SimConfig};

use crate::{MobilityError, MobilityResult, ProbabilityGrid};

/// Retry cap for rejection-sampling loops.
///
/// The original formulation retries forever; a misconfigured domain (e.g. a
/// single-cell grid) would spin.  65 536 draws is far beyond anything a sane
/// configuration needs while still failing fast when nothing can be drawn.
const MAX_REJECTION_DRAWS: u32 = 1 << 16;

/// Which per-round advance algorithm a model family uses.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AdvanceKind {
    /// Travel budget of one distance unit per round, interpolated along the
    /// straight line to the target; a round may cross several waypoints.
    Continuous,
    /// Exactly one grid-cell hop per round.
    Discrete,
}

/// Inputs a model needs to generate the next waypoint.
#[derive(Copy, Clone, Debug)]
pub struct WaypointContext {
    /// The target already reached (or the spawn point): `targets[cursor - 1]`.
    pub prev_target: Position,
    /// The agent's current position.
    pub position: Position,
    /// The grid cell occupied before the current one, if any — drives the
    /// momentum bias of the grid-walk variants.
    pub prev_cell: Option<Position>,
}

/// One mobility strategy per agent "kind".
#[derive(Clone, Debug)]
pub enum MobilityModel {
    /// Bounded random-waypoint: targets uniform over `[0, W] × [0, H]`.
    RandomWaypoint,
    /// Window-relative random-waypoint for toroidal worlds: targets uniform
    /// over a `W × H` window centered on the agent's current position.
    WindowedWaypoint,
    /// Random-direction: targets drawn uniformly from the domain perimeter,
    /// never twice in a row from the same wall.
    RandomDirection,
    /// Bounded Manhattan grid walk with momentum (no immediate reversal).
    GridWalk,
    /// Toroidal Manhattan grid walk; coordinates wrap modulo the domain.
    TorusGridWalk,
    /// Waypoints sampled from a shared heatmap-derived distribution.
    ProbabilityGrid(Arc<ProbabilityGrid>),
}

impl MobilityModel {
    /// Short family name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            MobilityModel::RandomWaypoint => "random-waypoint",
            MobilityModel::WindowedWaypoint => "windowed-waypoint",
            MobilityModel::RandomDirection => "random-direction",
            MobilityModel::GridWalk => "grid-walk",
            MobilityModel::TorusGridWalk => "torus-grid-walk",
            MobilityModel::ProbabilityGrid(_) => "probability-grid",
        }
    }

    /// The advance algorithm this family uses.
    pub fn advance_kind(&self) -> AdvanceKind {
        match self {
            MobilityModel::GridWalk | MobilityModel::TorusGridWalk => AdvanceKind::Discrete,
            _ => AdvanceKind::Continuous,
        }
    }

    /// The proximity metric this family must be paired with.
    pub fn metric(&self) -> Proximity {
        match self {
            MobilityModel::WindowedWaypoint | MobilityModel::TorusGridWalk => Proximity::Toroidal,
            _ => Proximity::Bounded,
        }
    }

    // ── Spawn ─────────────────────────────────────────────────────────────

    /// Draw a spawn position, rejecting collision with the source's spawn.
    pub fn spawn_position(
        &self,
        rng: &mut AgentRng,
        source_spawn: Position,
        cfg: &SimConfig,
    ) -> MobilityResult<Position> {
        for _ in 0..MAX_REJECTION_DRAWS {
            let pos = match self {
                // Grid walks start on integer cells; the bounded variant may
                // occupy the far wall, the toroidal one wraps before it.
                MobilityModel::GridWalk => Position::new(
                    rng.gen_range(0..=cfg.width as u32) as f64,
                    rng.gen_range(0..=cfg.height as u32) as f64,
                ),
                MobilityModel::TorusGridWalk => Position::new(
                    rng.gen_range(0..cfg.width as u32) as f64,
                    rng.gen_range(0..cfg.height as u32) as f64,
                ),
                _ => Position::new(
                    rng.gen_range(0.0..=cfg.width),
                    rng.gen_range(0.0..=cfg.height),
                ),
            };
            if pos != source_spawn {
                return Ok(pos);
            }
        }
        Err(MobilityError::RejectionBudget {
            what: "spawn position",
            attempts: MAX_REJECTION_DRAWS,
        })
    }

    // ── Waypoint generation ───────────────────────────────────────────────

    /// Generate the next waypoint for a non-source agent.
    ///
    /// Invoked only when the agent's target cursor has run off the end of
    /// its waypoint history.
    pub fn next_waypoint(
        &self,
        rng: &mut AgentRng,
        ctx: &WaypointContext,
        cfg: &SimConfig,
    ) -> MobilityResult<Position> {
        match self {
            MobilityModel::RandomWaypoint => {
                retry("waypoint", || {
                    let t = Position::new(
                        rng.gen_range(0.0..=cfg.width),
                        rng.gen_range(0.0..=cfg.height),
                    );
                    (t != ctx.prev_target).then_some(t)
                })
            }

            MobilityModel::WindowedWaypoint => {
                // The window tracks the agent, not the domain origin, so the
                // walk drifts freely; the toroidal metric folds it back.
                let x_lo = ctx.position.x - 0.5 * cfg.width;
                let x_hi = ctx.position.x + 0.5 * cfg.width;
                let y_lo = ctx.position.y - 0.5 * cfg.height;
                let y_hi = ctx.position.y + 0.5 * cfg.height;
                retry("waypoint", || {
                    let t = Position::new(rng.gen_range(x_lo..=x_hi), rng.gen_range(y_lo..=y_hi));
                    (t != ctx.prev_target).then_some(t)
                })
            }

            MobilityModel::RandomDirection => {
                Self::perimeter_waypoint(rng, ctx.prev_target, cfg)
            }

            MobilityModel::GridWalk => Self::grid_step(rng, ctx, cfg),

            MobilityModel::TorusGridWalk => Self::torus_grid_step(rng, ctx, cfg),

            MobilityModel::ProbabilityGrid(grid) => {
                Ok(grid.sample_position(rng, cfg.width, cfg.height))
            }
        }
    }

    /// Random-direction: map a uniform draw over the total perimeter length
    /// onto one of the four walls by arc length, rejecting targets that stay
    /// on the same wall as the previous one.
    fn perimeter_waypoint(
        rng: &mut AgentRng,
        prev: Position,
        cfg: &SimConfig,
    ) -> MobilityResult<Position> {
        let (w, h) = (cfg.width, cfg.height);
        let perimeter = 2.0 * w + 2.0 * h;
        retry("perimeter waypoint", || {
            let u = rng.gen_range(0.0..perimeter);
            let t = if u < w {
                Position::new(u, 0.0) // bottom wall, left → right
            } else if u < w + h {
                Position::new(w, u - w) // right wall, bottom → top
            } else if u < 2.0 * w + h {
                Position::new(w - (u - w - h), h) // top wall, right → left
            } else {
                Position::new(0.0, h - (u - 2.0 * w - h)) // left wall, top → bottom
            };

            // No wall-to-same-wall repeats.
            let same_wall = (prev.x == 0.0 && t.x == 0.0)
                || (prev.x == w && t.x == w)
                || (prev.y == 0.0 && t.y == 0.0)
                || (prev.y == h && t.y == h);
            (!same_wall).then_some(t)
        })
    }

    /// Bounded Manhattan step: orthogonal neighbors pruned to the domain,
    /// with the momentum bias applied when a previous cell is known.
    fn grid_step(
        rng: &mut AgentRng,
        ctx: &WaypointContext,
        cfg: &SimConfig,
    ) -> MobilityResult<Position> {
        let Position { x: cx, y: cy } = ctx.position;

        let mut dirs = vec![
            Position::new(cx - 1.0, cy),
            Position::new(cx + 1.0, cy),
            Position::new(cx, cy - 1.0),
            Position::new(cx, cy + 1.0),
        ];
        dirs.retain(|d| {
            d.x >= 0.0 && d.x <= cfg.width && d.y >= 0.0 && d.y <= cfg.height
        });
        debug_assert!((2..=4).contains(&dirs.len()));

        let n = dirs.len();
        let mut weights = vec![1.0 / n as f64; n];
        if let Some(last) = ctx.prev_cell {
            apply_momentum(&mut weights, &dirs, last, Position::new(2.0 * cx - last.x, 2.0 * cy - last.y));
        }

        rng.choose_weighted(&dirs, &weights)
            .copied()
            .ok_or(MobilityError::NoCandidate { what: "grid step" })
    }

    /// Toroidal Manhattan step: all four neighbors are always valid after
    /// wrapping, so the continue-straight direction always absorbs the
    /// reversal's freed weight.
    fn torus_grid_step(
        rng: &mut AgentRng,
        ctx: &WaypointContext,
        cfg: &SimConfig,
    ) -> MobilityResult<Position> {
        let (w, h) = (cfg.width, cfg.height);
        let Position { x: cx, y: cy } = ctx.position;

        let dirs = vec![
            Position::new(cx - 1.0, cy).wrap(w, h),
            Position::new(cx + 1.0, cy).wrap(w, h),
            Position::new(cx, cy - 1.0).wrap(w, h),
            Position::new(cx, cy + 1.0).wrap(w, h),
        ];
        let mut weights = vec![0.25; 4];
        if let Some(last) = ctx.prev_cell {
            let last = last.wrap(w, h);
            let opposite = Position::new(2.0 * cx - last.x, 2.0 * cy - last.y).wrap(w, h);
            apply_momentum(&mut weights, &dirs, last, opposite);
        }

        rng.choose_weighted(&dirs, &weights)
            .copied()
            .ok_or(MobilityError::NoCandidate {
                what: "torus grid step",
            })
    }
}

/// Momentum bias for grid walks.
///
/// Zeroes the reversal's weight (the candidate leading back to the cell just
/// vacated).  The freed weight goes entirely to the continue-straight
/// candidate if present, otherwise it is split evenly across the remaining
/// candidates.
pub(crate) fn apply_momentum(weights: &mut [f64], dirs: &[Position], last: Position, opposite: Position) {
    let Some(last_idx) = dirs.iter().position(|d| *d == last) else {
        // Previous cell is not among the candidates.  The walk itself never
        // produces this; fall back to uniform weights rather than assert.
        return;
    };
    let freed = weights[last_idx];
    weights[last_idx] = 0.0;

    if let Some(op_idx) = dirs.iter().position(|d| *d == opposite) {
        weights[op_idx] += freed;
    } else {
        let share = freed / (dirs.len() - 1) as f64;
        for w in weights.iter_mut() {
            if *w != 0.0 {
                *w += share;
            }
        }
    }
}

/// Bounded rejection-sampling loop: run `draw` until it accepts or the
/// retry cap is hit.
fn retry<F>(what: &'static str, mut draw: F) -> MobilityResult<Position>
where
    F: FnMut() -> Option<Position>,
{
    for _ in 0..MAX_REJECTION_DRAWS {
        if let Some(t) = draw() {
            return Ok(t);
        }
    }
    Err(MobilityError::RejectionBudget {
        what,
        attempts: MAX_REJECTION_DRAWS,
    })
}
