//! Core reassignment planning logic.
//!
//! Moving a replica straight from broker `from` to broker `to` can leave a
//! partition led by a replica that has not caught up yet. The planner splits
//! the move into three assignments that are applied one after another:
//!
//! 1. Add `to` at the end of the replica list: `[4, 5]` → `[4, 5, 6]`
//! 2. Put `to` in front so it becomes preferred leader: `[6, 4, 5]`
//! 3. Remove every occurrence of `from`: `[6, 5]`
//!
//! Only partitions that have a replica on `from` and none on `to` are
//! affected; all other partitions are left out of every plan, so each plan
//! is a diff rather than a full mirror of the input.

use crate::assignment::{BrokerId, Partition, PartitionAssignment};

use super::PlanStage;

/// Plans replica moves from one broker to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassignmentPlanner {
    from: BrokerId,
    to: BrokerId,
}

/// The three assignments of a safe replica move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentPlan {
    /// Stage 1: `to` appended as a follower.
    pub add_replica: PartitionAssignment,
    /// Stage 2: `to` promoted to preferred leader.
    pub elect_leader: PartitionAssignment,
    /// Stage 3: `from` removed.
    pub remove_replica: PartitionAssignment,
}

impl ReassignmentPlanner {
    /// Create a planner moving replicas from `from` to `to`.
    ///
    /// The planner does not reject `from == to`; such a planner matches no
    /// partition and produces empty plans.
    #[must_use]
    pub fn new(from: BrokerId, to: BrokerId) -> Self {
        Self { from, to }
    }

    /// Broker replicas are moved away from.
    #[must_use]
    pub fn from(&self) -> BrokerId {
        self.from
    }

    /// Broker replicas are moved onto.
    #[must_use]
    pub fn to(&self) -> BrokerId {
        self.to
    }

    /// Whether `partition` is part of the move: it has a replica on `from`
    /// and none on `to`.
    #[must_use]
    pub fn is_affected(&self, partition: &Partition) -> bool {
        partition.has_replica(self.from) && !partition.has_replica(self.to)
    }

    /// Replica list with `to` appended.
    #[must_use]
    pub fn add_replica(&self, replicas: &[BrokerId]) -> Vec<BrokerId> {
        let mut out = Vec::with_capacity(replicas.len() + 1);
        out.extend_from_slice(replicas);
        out.push(self.to);
        out
    }

    /// Replica list with `to` in front of the original replicas.
    #[must_use]
    pub fn elect_leader(&self, replicas: &[BrokerId]) -> Vec<BrokerId> {
        let mut out = Vec::with_capacity(replicas.len() + 1);
        out.push(self.to);
        out.extend_from_slice(replicas);
        out
    }

    /// Replica list of the leader election stage with every `from` removed.
    #[must_use]
    pub fn remove_replica(&self, replicas: &[BrokerId]) -> Vec<BrokerId> {
        self.elect_leader(replicas)
            .into_iter()
            .filter(|&broker| broker != self.from)
            .collect()
    }

    /// Build the three-stage plan for `assignment`.
    ///
    /// Affected partitions keep their input order in every stage. The
    /// source assignment is not modified.
    #[must_use]
    pub fn plan(&self, assignment: &PartitionAssignment) -> ReassignmentPlan {
        let mut plan = ReassignmentPlan::empty(assignment.version);

        for partition in &assignment.partitions {
            if !self.is_affected(partition) {
                tracing::debug!(
                    partition = %partition,
                    replicas = ?partition.replicas,
                    from = self.from,
                    to = self.to,
                    "partition not affected by move"
                );
                continue;
            }

            let replicas = &partition.replicas;
            plan.add_replica
                .partitions
                .push(partition.with_replicas(self.add_replica(replicas)));
            plan.elect_leader
                .partitions
                .push(partition.with_replicas(self.elect_leader(replicas)));
            plan.remove_replica
                .partitions
                .push(partition.with_replicas(self.remove_replica(replicas)));
        }

        tracing::info!(
            from = self.from,
            to = self.to,
            considered = assignment.len(),
            affected = plan.affected_partitions(),
            "generated reassignment plan"
        );

        plan
    }
}

/// Generate the add, elect and remove assignments for moving replicas from
/// `from` to `to`.
#[must_use]
pub fn generate_plans(
    assignment: &PartitionAssignment,
    from: BrokerId,
    to: BrokerId,
) -> (PartitionAssignment, PartitionAssignment, PartitionAssignment) {
    let plan = ReassignmentPlanner::new(from, to).plan(assignment);
    (plan.add_replica, plan.elect_leader, plan.remove_replica)
}

impl ReassignmentPlan {
    fn empty(version: i32) -> Self {
        Self {
            add_replica: PartitionAssignment::new(version),
            elect_leader: PartitionAssignment::new(version),
            remove_replica: PartitionAssignment::new(version),
        }
    }

    /// Assignment for a single stage.
    #[must_use]
    pub fn stage(&self, stage: PlanStage) -> &PartitionAssignment {
        match stage {
            PlanStage::AddReplica => &self.add_replica,
            PlanStage::ElectLeader => &self.elect_leader,
            PlanStage::RemoveReplica => &self.remove_replica,
        }
    }

    /// Stages paired with their assignments, in application order.
    pub fn stages(&self) -> impl Iterator<Item = (PlanStage, &PartitionAssignment)> {
        PlanStage::ALL.into_iter().map(move |s| (s, self.stage(s)))
    }

    /// Number of partitions touched by the move.
    #[must_use]
    pub fn affected_partitions(&self) -> usize {
        self.add_replica.len()
    }

    /// Whether no partition needs to move.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add_replica.is_empty()
    }
}
