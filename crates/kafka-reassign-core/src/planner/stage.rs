//! The three stages of a safe replica move.

use std::fmt;

/// One step of a replica move, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanStage {
    /// Append the new broker so it starts replicating as a follower.
    AddReplica,
    /// Move the new broker to the front to make it preferred leader.
    ElectLeader,
    /// Drop the old broker from the replica list.
    RemoveReplica,
}

impl PlanStage {
    /// All stages in application order.
    pub const ALL: [PlanStage; 3] = [Self::AddReplica, Self::ElectLeader, Self::RemoveReplica];

    /// 1-based stage number.
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Self::AddReplica => 1,
            Self::ElectLeader => 2,
            Self::RemoveReplica => 3,
        }
    }

    /// Human-readable title used in console headers.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddReplica => "Add new replica",
            Self::ElectLeader => "Elect new leader",
            Self::RemoveReplica => "Remove old replica",
        }
    }

    /// Zero-based position, for indexing per-stage settings.
    #[must_use]
    pub fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for PlanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plan {}: {}", self.number(), self.title())
    }
}
