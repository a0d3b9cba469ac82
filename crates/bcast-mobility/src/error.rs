use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    /// A rejection-sampling loop ran out of retries.  The caps are generous
    /// (tens of thousands of draws), so hitting one means the configuration
    /// leaves almost no valid draws — e.g. a one-cell grid domain.
    #[error("gave up drawing a {what} after {attempts} rejected attempts")]
    RejectionBudget { what: &'static str, attempts: u32 },

    /// A weighted choice had no candidate with positive weight.  Unreachable
    /// for any validated configuration; surfaced instead of panicking.
    #[error("no viable candidate for {what}")]
    NoCandidate { what: &'static str },

    #[error("invalid probability grid: {0}")]
    Grid(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
