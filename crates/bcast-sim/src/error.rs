use bcast_core::BcastError;
use bcast_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// The mobility-model family and the proximity metric must be paired
    /// consistently, so all per-agent models in one run must agree on both.
    #[error("mixed mobility families in one run: {0}")]
    MixedFamilies(String),

    #[error(transparent)]
    Core(#[from] BcastError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
