//! Strongly typed agent identity.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can be used as a map key or sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing
//! into `Vec`s via `id.0 as usize`, but callers should prefer the `.index()`
//! helper for clarity.

use std::fmt;

/// Index of an agent in the simulation's agent list.
///
/// Agent 0 is the *source*: the origin of the broadcast.  Its spawn position
/// and early waypoints are caller-supplied, and it holds still once its
/// scripted trace runs out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The broadcast origin.
    pub const SOURCE: AgentId = AgentId(0);

    /// `true` for the broadcast origin.
    #[inline(always)]
    pub fn is_source(self) -> bool {
        self.0 == 0
    }

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
