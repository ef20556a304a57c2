//! Kafka Reassignment Planner Core Library
//!
//! This library computes safe partition reassignment plans that move replica
//! responsibility from one broker to another without an unclean leader
//! election. A move is split into three assignments applied in order:
//! add the new replica, elect it leader, remove the old replica.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`assignment`] - Partition assignment documents and loading
//! - [`planner`] - Three-stage reassignment planning
//! - [`output`] - Plan rendering, console and file sinks
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Domain-specific error types
//!
//! # Example
//!
//! ```rust
//! use kafka_reassign_core::assignment::PartitionAssignment;
//! use kafka_reassign_core::planner::ReassignmentPlanner;
//!
//! let assignment = PartitionAssignment::from_json(
//!     r#"{"version":1,"partitions":[{"topic":"t","partition":0,"replicas":[4,5]}]}"#,
//! )?;
//!
//! let plan = ReassignmentPlanner::new(4, 6).plan(&assignment);
//! assert_eq!(plan.remove_replica.partitions[0].replicas, vec![6, 5]);
//! # Ok::<(), kafka_reassign_core::AssignmentError>(())
//! ```

#![forbid(unsafe_code)]

pub mod assignment;
pub mod config;
pub mod error;
pub mod output;
pub mod planner;

// Re-export commonly used types
pub use assignment::{BrokerId, Partition, PartitionAssignment};
pub use config::{OutputMode, PlannerConfig};
pub use error::{AssignmentError, ConfigError, OutputError};
pub use output::{ConsoleSink, FileSink, PlanSink, SinkReport};
pub use planner::{generate_plans, PlanStage, ReassignmentPlan, ReassignmentPlanner};
