//! Line formats for the two listing commands.
//!
//! Kept as pure functions so the formats can be asserted on without capturing
//! stdout.

use workflows::{Workflow, WorkflowRun};

/// One `list` output line: `  - {name} ({state})`.
pub fn workflow_line(workflow: &Workflow) -> String {
    format!("  - {} ({})", workflow.name, workflow.state)
}

/// One `status` output line: `  - {name}: {status} ({local time})`.
///
/// The status column shows the conclusion once the run has one, the
/// in-progress status until then.
pub fn run_line(run: &WorkflowRun) -> String {
    format!(
        "  - {}: {} ({})",
        run.name,
        run.resolved_status(),
        run.created_at.local_display()
    )
}
