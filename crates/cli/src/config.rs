//! Configuration loading and credential resolution.
//!
//! Two sources, one precedence rule: the per-user JSON file first, the
//! `GITHUB_TOKEN` / `GITHUB_OWNER` / `GITHUB_REPO` environment variables for
//! anything the file leaves unset. A missing file is normal; a malformed one
//! is warned about and then treated as empty. Neither ever stops a command
//! from running.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use workflows::{AuthToken, RepositoryCoordinate};

const ENV_TOKEN: &str = "GITHUB_TOKEN";
const ENV_OWNER: &str = "GITHUB_OWNER";
const ENV_REPO: &str = "GITHUB_REPO";

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

/// The optional JSON file at `$HOME/.vocat/config.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Optional GitHub credential section.
    #[serde(default)]
    pub github: Option<GithubSection>,
}

/// The `github` section of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct GithubSection {
    /// Personal access token.
    pub token: Option<String>,
    /// Repository owner (account or organisation).
    pub owner: Option<String>,
    /// Repository name.
    pub repo: Option<String>,
}

impl ConfigFile {
    /// The fixed per-user config location, or `None` when `$HOME` is unset.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".vocat").join("config.json"))
    }

    /// Reads the file at `path`, degrading to the empty configuration when it
    /// is missing or malformed. Only the malformed case is worth a warning.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "ignoring malformed config file"
                );
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// The environment variables consulted for unset config fields, captured in
/// one place so resolution stays a pure function.
#[derive(Debug, Default)]
pub struct EnvSnapshot {
    /// `GITHUB_TOKEN`.
    pub token: Option<String>,
    /// `GITHUB_OWNER`.
    pub owner: Option<String>,
    /// `GITHUB_REPO`.
    pub repo: Option<String>,
}

impl EnvSnapshot {
    /// Reads the three variables from the process environment.
    pub fn capture() -> Self {
        Self {
            token: std::env::var(ENV_TOKEN).ok(),
            owner: std::env::var(ENV_OWNER).ok(),
            repo: std::env::var(ENV_REPO).ok(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Immutable resolved settings for one invocation.
#[derive(Debug)]
pub struct Settings {
    /// Bearer credential, when one was resolvable. Commands that need it and
    /// don't find it fail before any network call.
    pub token: Option<AuthToken>,
    /// Target repository. Unconfigured parts stay empty and are rejected by
    /// the remote API rather than locally.
    pub coordinate: RepositoryCoordinate,
}

impl Settings {
    /// Applies the precedence rule: file value first, environment second.
    ///
    /// An empty token from either source counts as absent.
    pub fn resolve(file: ConfigFile, env: EnvSnapshot) -> Self {
        let github = file.github.unwrap_or_default();

        let token = github.token.or(env.token).and_then(AuthToken::new);
        let owner = github.owner.or(env.owner).unwrap_or_default();
        let repo = github.repo.or(env.repo).unwrap_or_default();

        Self {
            token,
            coordinate: RepositoryCoordinate::new(owner, repo),
        }
    }
}
