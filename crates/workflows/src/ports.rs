//! Port traits implemented by the infrastructure crates.
//!
//! The domain sees only these traits. The `github` crate supplies the real
//! [`ActionsGateway`] over the REST API; the `speech` crate supplies the real
//! [`Speaker`] over the host TTS command. Tests substitute recording fakes.

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::identifiers::{AuthToken, BranchName, WorkflowFileName};
use crate::types::{Workflow, WorkflowRun};

/// The slice of the GitHub Actions REST surface this tool consumes.
///
/// Each method corresponds to exactly one HTTP request; implementations must
/// not retry. The token is passed per call so the caller decides — before any
/// request exists — what happens when there is none.
#[async_trait]
pub trait ActionsGateway {
    /// Dispatches `workflow` on `branch` via the workflow-dispatch endpoint.
    async fn dispatch_workflow(
        &self,
        token: &AuthToken,
        workflow: &WorkflowFileName,
        branch: &BranchName,
    ) -> Result<(), GatewayError>;

    /// Lists the repository's workflow definitions, in API discovery order.
    async fn list_workflows(&self, token: &AuthToken) -> Result<Vec<Workflow>, GatewayError>;

    /// Lists the most recent workflow runs, newest first as the API returns
    /// them, at most [`crate::types::RECENT_RUNS_PAGE`] of them.
    async fn recent_runs(&self, token: &AuthToken) -> Result<Vec<WorkflowRun>, GatewayError>;
}

/// Best-effort text-to-speech.
///
/// Speech is cosmetic: callers await the result so output never interleaves,
/// but a failure is only ever logged, never surfaced.
#[async_trait]
pub trait Speaker {
    /// Speaks `message` aloud, completing when the utterance has finished.
    async fn speak(&self, message: &str) -> Result<(), SpeechError>;
}

/// A failed speech attempt.
///
/// Carries only the underlying description; there is nothing for a caller to
/// branch on since speech failures are always swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SpeechError(pub String);
