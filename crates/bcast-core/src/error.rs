//! Framework error type.
//!
//! Sub-crates define their own error enums and convert them into `BcastError`
//! via `From` impls, or keep them separate and wrap `BcastError` as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for `bcast-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BcastError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `bcast-*` crates.
pub type BcastResult<T> = Result<T, BcastError>;
