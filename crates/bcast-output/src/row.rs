//! Plain data row types written by output backends.

/// One recorded position of one agent.
///
/// `step` counts from 0 within the agent's post-warm-up course; continuous
/// movers may record more than one step per round when they pass a waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseRow {
    pub agent_id: u32,
    pub step:     u32,
    pub x:        f64,
    pub y:        f64,
}

/// One waypoint drawn by one agent, in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRow {
    pub agent_id: u32,
    pub step:     u32,
    pub x:        f64,
    pub y:        f64,
}

/// Summary statistics for one propagation round.
///
/// Round 0 is the pre-movement snapshot (just the source).  The neighbor
/// fraction is only present when the run recorded it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRow {
    pub round:             u32,
    pub informed:          u32,
    pub neighbor_fraction: Option<f64>,
}
