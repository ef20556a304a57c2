//! One JSON file per plan.
//!
//! File names are derived from the input document: the extension is
//! stripped and a per-stage suffix plus the output extension appended, so
//! `cluster/topics.json` becomes `cluster/topics-01.json`,
//! `cluster/topics-02.json` and `cluster/topics-03.json`.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::OutputError;
use crate::planner::{PlanStage, ReassignmentPlan};

use super::{render_plan, PlanSink, SinkReport};

/// Writes each plan to its own file and reports `Saved: <path>` lines on a
/// status stream.
#[derive(Debug)]
pub struct FileSink<W> {
    base: OsString,
    config: OutputConfig,
    status: W,
}

impl<W: Write> FileSink<W> {
    /// Create a sink deriving plan file names from `input`.
    pub fn new(input: &Path, config: &OutputConfig, status: W) -> Self {
        Self {
            base: base_name(input),
            config: config.clone(),
            status,
        }
    }

    /// Path a stage's plan is written to.
    #[must_use]
    pub fn plan_path(&self, stage: PlanStage) -> PathBuf {
        let mut name = self.base.clone();
        name.push(self.config.suffix(stage));
        name.push(".");
        name.push(&self.config.extension);
        PathBuf::from(name)
    }

    /// Consume the sink, returning the status writer.
    pub fn into_inner(self) -> W {
        self.status
    }

    fn write_stage(&mut self, stage: PlanStage, rendered: &str) -> Result<PathBuf, OutputError> {
        let path = self.plan_path(stage);
        std::fs::write(&path, rendered).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Input path with its extension removed.
fn base_name(input: &Path) -> OsString {
    if input.extension().is_some() {
        input.with_extension("").into_os_string()
    } else {
        input.as_os_str().to_owned()
    }
}

impl<W: Write> PlanSink for FileSink<W> {
    fn emit(&mut self, plan: &ReassignmentPlan) -> SinkReport {
        let mut report = SinkReport::default();

        for (stage, assignment) in plan.stages() {
            let written = render_plan(stage, assignment, &self.config.indent)
                .and_then(|rendered| self.write_stage(stage, &rendered));

            match written {
                Ok(path) => {
                    tracing::info!(
                        plan = stage.number(),
                        path = %path.display(),
                        partitions = assignment.len(),
                        "saved plan"
                    );
                    if let Err(e) = writeln!(self.status, "Saved: {}", path.display()) {
                        tracing::warn!(error = %e, "failed to report saved plan");
                    }
                    report.written.push(path);
                }
                Err(e) => {
                    tracing::error!(plan = stage.number(), error = %e, "failed to save plan");
                    report.failures.push(e);
                }
            }
        }

        report
    }
}
