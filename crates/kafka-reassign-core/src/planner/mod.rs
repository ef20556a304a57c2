//! Reassignment planning logic.
//!
//! This module turns a partition assignment and a `(from, to)` broker pair
//! into three successive assignments that move replicas off `from` and onto
//! `to` without an unclean leader election.
//!
//! # Stages
//!
//! The [`PlanStage`] enum names the three steps; a [`ReassignmentPlan`]
//! holds one assignment per stage and is produced by
//! [`ReassignmentPlanner::plan`].

mod reassignment;
mod stage;

pub use reassignment::{generate_plans, ReassignmentPlan, ReassignmentPlanner};
pub use stage::PlanStage;
