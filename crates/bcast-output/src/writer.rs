//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CourseRow, OutputResult, RoundRow, TargetRow};

/// Trait implemented by result writers.
pub trait OutputWriter {
    /// Write a batch of course rows.
    fn write_courses(&mut self, rows: &[CourseRow]) -> OutputResult<()>;

    /// Write a batch of waypoint rows.
    fn write_targets(&mut self, rows: &[TargetRow]) -> OutputResult<()>;

    /// Write one round summary row.
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
