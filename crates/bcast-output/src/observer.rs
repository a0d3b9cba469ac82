//! `RunOutputObserver<W>` — bridges `RoundObserver` to an `OutputWriter`.

use bcast_core::Round;
use bcast_sim::{Outcome, RoundObserver};

use crate::row::RoundRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`RoundObserver`] that streams round summaries to any [`OutputWriter`]
/// backend while the run is in flight.
///
/// Courses and waypoints only settle once the run ends, so this observer
/// covers `rounds.csv` alone; use [`export_run`](crate::export_run) when the
/// per-agent tables are wanted too.
///
/// Errors from the writer are stored internally because `RoundObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RoundObserver for RunOutputObserver<W> {
    fn on_round_end(&mut self, round: Round, informed: u32) {
        let row = RoundRow {
            round: round.0,
            informed,
            neighbor_fraction: None,
        };
        let result = self.writer.write_round(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _outcome: &Outcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
