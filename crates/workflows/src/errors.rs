//! Command and gateway error types for the vocat domain.
//!
//! [`CommandError`] covers everything a single CLI invocation can fail with.
//! Every variant is terminal for that invocation but non-fatal for the
//! process: the dispatcher prints the error and the program still exits
//! cleanly. Nothing here is ever retried.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Gateway errors
// ---------------------------------------------------------------------------

/// A failed exchange with the GitHub API.
///
/// Produced by [`crate::ports::ActionsGateway`] implementations. The split
/// mirrors what a human needs to read: the remote's own words when the API
/// answered with an error body, the client's words when no answer arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The API returned a non-success status.
    ///
    /// `message` carries the remote-supplied `message` field when the error
    /// body had one, otherwise `HTTP {status}`.
    #[error("{message}")]
    Remote {
        /// HTTP status code of the rejected request.
        status: u16,
        /// Remote error message, or the `HTTP {status}` fallback.
        message: String,
    },

    /// The request never produced an HTTP response (connect failure, TLS
    /// failure, invalid response body).
    #[error("{0}")]
    Transport(String),
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Errors a single dispatched command can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No token was resolvable from configuration or environment.
    ///
    /// Raised before any network call; the fixed message is the whole story.
    #[error("GitHub token not configured")]
    MissingCredentials,

    /// The `deploy` argument named an environment outside the closed alias
    /// table.
    ///
    /// Raised before any network call.
    #[error("Unknown environment: {name}")]
    UnknownEnvironment {
        /// The unrecognised environment name as typed.
        name: String,
    },

    /// The one network call this command made failed.
    #[error("Error: {0}")]
    Gateway(#[from] GatewayError),
}
