//! Run observer trait for progress reporting and data collection.

use bcast_core::Round;

use crate::Outcome;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the round loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl RoundObserver for ProgressPrinter {
///     fn on_round_end(&mut self, round: Round, informed: u32) {
///         if round.0 % self.interval == 0 {
///             println!("{round}: {informed} informed");
///         }
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called once after warm-up movement and history truncation, before the
    /// round-0 snapshot.
    fn on_warmup_end(&mut self) {}

    /// Called at the end of each propagation round with the informed total.
    fn on_round_end(&mut self, _round: Round, _informed: u32) {}

    /// Called once when the run finishes, with its outcome.
    fn on_run_end(&mut self, _outcome: &Outcome) {}
}

/// A [`RoundObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
