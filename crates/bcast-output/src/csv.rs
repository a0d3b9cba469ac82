//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `courses.csv`
//! - `targets.csv`
//! - `rounds.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CourseRow, OutputResult, RoundRow, TargetRow};

/// Writes simulation results to three CSV files.
pub struct CsvWriter {
    courses:  Writer<File>,
    targets:  Writer<File>,
    rounds:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut courses = Writer::from_path(dir.join("courses.csv"))?;
        courses.write_record(["agent_id", "step", "x", "y"])?;

        let mut targets = Writer::from_path(dir.join("targets.csv"))?;
        targets.write_record(["agent_id", "step", "x", "y"])?;

        let mut rounds = Writer::from_path(dir.join("rounds.csv"))?;
        rounds.write_record(["round", "informed", "neighbor_fraction"])?;

        Ok(Self {
            courses,
            targets,
            rounds,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_courses(&mut self, rows: &[CourseRow]) -> OutputResult<()> {
        for row in rows {
            self.courses.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_targets(&mut self, rows: &[TargetRow]) -> OutputResult<()> {
        for row in rows {
            self.targets.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
        self.rounds.write_record(&[
            row.round.to_string(),
            row.informed.to_string(),
            row.neighbor_fraction.map(|f| f.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.courses.flush()?;
        self.targets.flush()?;
        self.rounds.flush()?;
        Ok(())
    }
}
