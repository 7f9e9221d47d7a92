//! Shared value types for the vocat domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! meaningful values with invariants (e.g. the deployment alias table is
//! closed) and participate in domain computations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::WorkflowFileName;

/// Page size requested when listing recent workflow runs.
pub const RECENT_RUNS_PAGE: u8 = 5;

// ---------------------------------------------------------------------------
// Repository coordinate
// ---------------------------------------------------------------------------

/// The `owner/repo` pair every GitHub Actions endpoint is scoped to.
///
/// Resolved once at startup from configuration and environment; immutable for
/// the process lifetime. An unconfigured part stays empty — whether the pair
/// actually names a repository is the remote API's call, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryCoordinate {
    /// Account or organisation owning the repository.
    pub owner: String,
    /// Repository name within the owner's namespace.
    pub repo: String,
}

impl RepositoryCoordinate {
    /// Creates a coordinate from its two parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl std::fmt::Display for RepositoryCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// ---------------------------------------------------------------------------
// Remote records
// ---------------------------------------------------------------------------

/// One workflow definition as reported by the listing endpoint.
///
/// `state` is GitHub's activation state (`"active"`, `"disabled_manually"`,
/// ...); it is displayed verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Human-readable workflow name.
    pub name: String,
    /// Activation state reported by GitHub.
    pub state: String,
}

/// One execution instance of a workflow as reported by the runs endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Name of the workflow this run executed.
    pub name: String,
    /// In-progress status (`"queued"`, `"in_progress"`, `"completed"`, ...).
    pub status: String,
    /// Final outcome (`"success"`, `"failure"`, ...); absent while running.
    pub conclusion: Option<String>,
    /// When GitHub created the run.
    pub created_at: Timestamp,
}

impl WorkflowRun {
    /// The status a human cares about: the conclusion once the run has one,
    /// the in-progress status until then.
    pub fn resolved_status(&self) -> &str {
        self.conclusion.as_deref().unwrap_or(&self.status)
    }
}

// ---------------------------------------------------------------------------
// Deployment aliases
// ---------------------------------------------------------------------------

/// A deployment target with a fixed workflow file behind it.
///
/// The mapping is closed: only these two aliases exist, and each resolves to
/// exactly one workflow filename. Anything else is rejected at parse time,
/// before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployEnvironment {
    /// Pre-production environment, deployed by `deploy-staging.yml`.
    Staging,
    /// Live environment, deployed by `deploy-production.yml`.
    Production,
}

impl DeployEnvironment {
    /// Returns the workflow file that deploys this environment.
    pub fn workflow_file(self) -> WorkflowFileName {
        let file = match self {
            Self::Staging => "deploy-staging.yml",
            Self::Production => "deploy-production.yml",
        };
        WorkflowFileName::new(file).expect("alias table entries are non-empty")
    }
}

impl std::str::FromStr for DeployEnvironment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for DeployEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staging => f.write_str("staging"),
            Self::Production => f.write_str("production"),
        }
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Renders the timestamp in the host's local timezone.
    pub fn local_display(self) -> String {
        self.0
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn deploy_alias_table_is_closed() {
        assert_eq!(
            DeployEnvironment::from_str("staging"),
            Ok(DeployEnvironment::Staging)
        );
        assert_eq!(
            DeployEnvironment::from_str("production"),
            Ok(DeployEnvironment::Production)
        );
        assert!(DeployEnvironment::from_str("qa").is_err());
        assert!(DeployEnvironment::from_str("Staging").is_err());
        assert!(DeployEnvironment::from_str("").is_err());
    }

    #[test]
    fn aliases_resolve_to_fixed_workflow_files() {
        assert_eq!(
            DeployEnvironment::Staging.workflow_file().as_str(),
            "deploy-staging.yml"
        );
        assert_eq!(
            DeployEnvironment::Production.workflow_file().as_str(),
            "deploy-production.yml"
        );
    }

    #[test]
    fn resolved_status_prefers_conclusion() {
        let mut run = WorkflowRun {
            name: "CI".to_string(),
            status: "in_progress".to_string(),
            conclusion: None,
            created_at: Timestamp::now(),
        };
        assert_eq!(run.resolved_status(), "in_progress");

        run.conclusion = Some("success".to_string());
        assert_eq!(run.resolved_status(), "success");
    }

    #[test]
    fn coordinate_displays_as_owner_slash_repo() {
        let coordinate = RepositoryCoordinate::new("octocat", "hello-world");
        assert_eq!(coordinate.to_string(), "octocat/hello-world");
    }
}
