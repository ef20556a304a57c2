//! Console output of all three plans.

use std::io::Write;

use crate::error::OutputError;
use crate::planner::{PlanStage, ReassignmentPlan};

use super::{render_plan, PlanSink, SinkReport};

/// Writes every plan to a stream under a `=== Plan N: ... ===` header.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
    indent: String,
}

impl<W: Write> ConsoleSink<W> {
    /// Create a sink writing to `out` with the given JSON indentation.
    pub fn new(out: W, indent: impl Into<String>) -> Self {
        Self {
            out,
            indent: indent.into(),
        }
    }

    /// Consume the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_stage(&mut self, stage: PlanStage, rendered: &str) -> std::io::Result<()> {
        if stage != PlanStage::AddReplica {
            writeln!(self.out)?;
        }
        writeln!(self.out, "=== {stage} ===")?;
        writeln!(self.out, "{rendered}")?;
        self.out.flush()
    }
}

impl<W: Write> PlanSink for ConsoleSink<W> {
    fn emit(&mut self, plan: &ReassignmentPlan) -> SinkReport {
        let mut report = SinkReport::default();

        for (stage, assignment) in plan.stages() {
            let rendered = match render_plan(stage, assignment, &self.indent) {
                Ok(rendered) => rendered,
                Err(e) => {
                    tracing::error!(plan = stage.number(), error = %e, "failed to render plan");
                    report.failures.push(e);
                    continue;
                }
            };

            if let Err(source) = self.write_stage(stage, &rendered) {
                let e = OutputError::Console {
                    plan: stage.number(),
                    source,
                };
                tracing::error!(error = %e, "failed to print plan");
                report.failures.push(e);
            }
        }

        report
    }
}
