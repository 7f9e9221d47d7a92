//! Vocat GitHub infrastructure adapter.
//!
//! Implements [`workflows::ActionsGateway`] against the GitHub REST v3 API
//! with [`reqwest`]. Exactly three endpoints are consumed: workflow dispatch
//! (POST), workflow listing (GET), and run listing (GET).
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. All GitHub
//! API details (URLs, headers, status handling, error-body parsing) are
//! handled here; the [`workflows`] crate never sees them. Requests are made
//! once and never retried — a failed call is the caller's answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use workflows::{
    AuthToken, BranchName, GatewayError, RepositoryCoordinate, Workflow, WorkflowFileName,
    WorkflowRun, RECENT_RUNS_PAGE,
};

/// Root of the GitHub REST v3 API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = "vocat/0.1";
const ACCEPT: &str = "application/vnd.github+json";

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

/// Body of the workflow-dispatch POST.
#[derive(Debug, Serialize)]
struct DispatchRequest<'a> {
    r#ref: &'a str,
}

/// Envelope of `GET /repos/{owner}/{repo}/actions/workflows`.
#[derive(Debug, Deserialize)]
struct WorkflowList {
    workflows: Vec<Workflow>,
}

/// Envelope of `GET /repos/{owner}/{repo}/actions/runs`.
#[derive(Debug, Deserialize)]
struct RunList {
    workflow_runs: Vec<WorkflowRun>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// [`workflows::ActionsGateway`] implementation over the GitHub REST API.
///
/// Holds the repository coordinate; the token arrives per call so the
/// dispatcher's missing-credential guard stays in front of every request.
pub struct GithubActionsClient {
    http: reqwest::Client,
    base: String,
    coordinate: RepositoryCoordinate,
}

impl GithubActionsClient {
    /// Creates a client scoped to `coordinate` against the public GitHub API.
    pub fn new(coordinate: RepositoryCoordinate) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base: GITHUB_API_BASE.to_string(),
            coordinate,
        })
    }

    fn workflow_dispatch_url(&self, workflow: &WorkflowFileName) -> String {
        format!(
            "{}/repos/{}/actions/workflows/{}/dispatches",
            self.base, self.coordinate, workflow
        )
    }

    fn workflows_url(&self) -> String {
        format!("{}/repos/{}/actions/workflows", self.base, self.coordinate)
    }

    fn runs_url(&self) -> String {
        format!(
            "{}/repos/{}/actions/runs?per_page={}",
            self.base, self.coordinate, RECENT_RUNS_PAGE
        )
    }

    fn get(&self, url: &str, token: &AuthToken) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, auth_header(token))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, ACCEPT)
    }
}

#[async_trait]
impl workflows::ActionsGateway for GithubActionsClient {
    async fn dispatch_workflow(
        &self,
        token: &AuthToken,
        workflow: &WorkflowFileName,
        branch: &BranchName,
    ) -> Result<(), GatewayError> {
        let url = self.workflow_dispatch_url(workflow);
        tracing::debug!(%url, %branch, "dispatching workflow");

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, auth_header(token))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .json(&DispatchRequest {
                r#ref: branch.as_str(),
            })
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response).await.map(drop)
    }

    async fn list_workflows(&self, token: &AuthToken) -> Result<Vec<Workflow>, GatewayError> {
        let url = self.workflows_url();
        tracing::debug!(%url, "listing workflows");

        let response = self.get(&url, token).send().await.map_err(transport)?;
        let listed: WorkflowList = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        Ok(listed.workflows)
    }

    async fn recent_runs(&self, token: &AuthToken) -> Result<Vec<WorkflowRun>, GatewayError> {
        let url = self.runs_url();
        tracing::debug!(%url, "listing recent runs");

        let response = self.get(&url, token).send().await.map_err(transport)?;
        let listed: RunList = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        Ok(listed.workflow_runs)
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

fn auth_header(token: &AuthToken) -> String {
    format!("token {}", token.as_str())
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Passes a successful response through; turns anything else into the remote
/// error the user should read.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(remote_error(status.as_u16(), &body))
}

/// Builds the [`GatewayError`] for a non-success status, preferring the
/// remote-supplied `message` field over a generic status line.
fn remote_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(|message| message.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"));

    GatewayError::Remote { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GithubActionsClient {
        GithubActionsClient::new(RepositoryCoordinate::new("octocat", "hello-world")).unwrap()
    }

    #[test]
    fn urls_cover_the_three_documented_endpoints() {
        let client = client();

        assert_eq!(
            client.workflow_dispatch_url(&WorkflowFileName::new("build.yml").unwrap()),
            "https://api.github.com/repos/octocat/hello-world/actions/workflows/build.yml/dispatches"
        );
        assert_eq!(
            client.workflows_url(),
            "https://api.github.com/repos/octocat/hello-world/actions/workflows"
        );
        assert_eq!(
            client.runs_url(),
            "https://api.github.com/repos/octocat/hello-world/actions/runs?per_page=5"
        );
    }

    #[test]
    fn dispatch_body_carries_the_ref() {
        let body = serde_json::to_string(&DispatchRequest { r#ref: "main" }).unwrap();
        assert_eq!(body, r#"{"ref":"main"}"#);
    }

    #[test]
    fn remote_error_prefers_the_api_message() {
        let err = remote_error(401, r#"{"message":"Bad credentials"}"#);
        assert_eq!(
            err,
            GatewayError::Remote {
                status: 401,
                message: "Bad credentials".to_string(),
            }
        );
    }

    #[test]
    fn remote_error_falls_back_to_the_status_line() {
        assert_eq!(
            remote_error(502, "<html>bad gateway</html>"),
            GatewayError::Remote {
                status: 502,
                message: "HTTP 502".to_string(),
            }
        );
        assert_eq!(
            remote_error(404, r#"{"documentation_url":"..."}"#),
            GatewayError::Remote {
                status: 404,
                message: "HTTP 404".to_string(),
            }
        );
    }

    #[test]
    fn run_list_envelope_deserializes_github_payloads() {
        let payload = r#"{
            "total_count": 1,
            "workflow_runs": [{
                "name": "CI",
                "status": "completed",
                "conclusion": "success",
                "created_at": "2024-03-01T12:00:00Z",
                "id": 42
            }]
        }"#;

        let listed: RunList = serde_json::from_str(payload).unwrap();
        assert_eq!(listed.workflow_runs.len(), 1);
        assert_eq!(listed.workflow_runs[0].resolved_status(), "success");
    }

    #[test]
    fn workflow_list_envelope_deserializes_github_payloads() {
        let payload = r#"{
            "total_count": 2,
            "workflows": [
                {"id": 1, "name": "CI", "state": "active", "path": ".github/workflows/ci.yml"},
                {"id": 2, "name": "Deploy", "state": "disabled_manually", "path": ".github/workflows/deploy.yml"}
            ]
        }"#;

        let listed: WorkflowList = serde_json::from_str(payload).unwrap();
        let names: Vec<&str> = listed.workflows.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["CI", "Deploy"]);
    }
}
