//! One-shot export of a finished run.

use bcast_sim::Simulation;

use crate::row::{CourseRow, RoundRow, TargetRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write everything a finished `Simulation` recorded to `writer`, then
/// finish it: the round series, plus every agent's course and waypoint list.
pub fn export_run<W: OutputWriter>(sim: &Simulation, writer: &mut W) -> OutputResult<()> {
    let fractions = sim.neighbor_series();
    for (i, &informed) in sim.informed_series().iter().enumerate() {
        writer.write_round(&RoundRow {
            round: i as u32,
            informed,
            neighbor_fraction: fractions.get(i).copied(),
        })?;
    }

    for agent in sim.agents() {
        let id = agent.id().0;

        let courses: Vec<CourseRow> = agent
            .course()
            .iter()
            .enumerate()
            .map(|(step, p)| CourseRow { agent_id: id, step: step as u32, x: p.x, y: p.y })
            .collect();
        writer.write_courses(&courses)?;

        let targets: Vec<TargetRow> = agent
            .targets()
            .iter()
            .enumerate()
            .map(|(step, p)| TargetRow { agent_id: id, step: step as u32, x: p.x, y: p.y })
            .collect();
        writer.write_targets(&targets)?;
    }

    writer.finish()
}
