//! Plan rendering and output sinks.
//!
//! Plans are rendered as pretty-printed JSON (tab indentation by default)
//! and handed to a [`PlanSink`]:
//!
//! - [`ConsoleSink`] - all three plans to a stream, each under a header
//! - [`FileSink`] - one file per plan, derived from the input file name
//!
//! Every plan is emitted independently, so a failure on one plan is
//! reported in the [`SinkReport`] without stopping the others.

mod console;
mod files;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::assignment::PartitionAssignment;
use crate::error::{OutputError, OutputResult};
use crate::planner::{PlanStage, ReassignmentPlan};

pub use console::ConsoleSink;
pub use files::FileSink;

/// Consumer of generated plans.
pub trait PlanSink {
    /// Emit all stages of `plan`, attempting every stage even if an
    /// earlier one fails.
    fn emit(&mut self, plan: &ReassignmentPlan) -> SinkReport;
}

/// Outcome of emitting a plan.
#[derive(Debug, Default)]
pub struct SinkReport {
    /// Files written successfully, in stage order.
    pub written: Vec<PathBuf>,
    /// Per-stage failures.
    pub failures: Vec<OutputError>,
}

impl SinkReport {
    /// Whether every stage was emitted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render one stage's assignment as pretty-printed JSON.
///
/// Field order is `version`, `partitions`, then `topic`, `partition`,
/// `replicas` per partition. No trailing newline is added.
///
/// A stage with no partitions renders `"partitions": []`. The original Go
/// tool wrote `"partitions": null` in that case, so empty plans are not
/// byte-identical to its output.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_plan(
    stage: PlanStage,
    assignment: &PartitionAssignment,
    indent: &str,
) -> OutputResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    assignment
        .serialize(&mut ser)
        .map_err(|source| OutputError::Serialize {
            plan: stage.number(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
