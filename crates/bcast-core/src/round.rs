//! Simulation round counter.
//!
//! One round = one movement phase followed by one infection-check phase.
//! Round 0 is the post-warm-up snapshot taken before any propagation; the
//! first propagation round is round 1.

use std::fmt;

/// An absolute simulation round counter.
///
/// `u32` is ample: even the pathological window-relative walks in the
/// original experiments finish within 10^5 rounds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u32);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round immediately after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }

    /// Rounds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Round) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u32) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
