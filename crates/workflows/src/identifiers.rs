//! Newtype domain identifiers.
//!
//! Every domain concept that has an identity is represented as a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging — for example —
//! a [`WorkflowFileName`] with a [`BranchName`] even though both are `String`
//! under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — GitHub names
// ---------------------------------------------------------------------------

string_id! {
    /// The filename of a workflow definition within the target repository
    /// (e.g. `"deploy-staging.yml"`).
    ///
    /// Validity is determined entirely by the remote API; locally this is just
    /// a non-empty string.
    WorkflowFileName
}

impl WorkflowFileName {
    /// The workflow dispatched by `vocat run` when no filename is given.
    pub fn default_for_run() -> Self {
        Self("test".to_string())
    }
}

string_id! {
    /// A Git branch name (e.g. `"main"`).
    BranchName
}

impl BranchName {
    /// The ref a dispatch targets when the caller does not specify one.
    pub fn main() -> Self {
        Self("main".to_string())
    }
}

// ---------------------------------------------------------------------------
// Identifiers — credentials
// ---------------------------------------------------------------------------

/// A GitHub personal access token used as the bearer credential.
///
/// Unlike the other string newtypes this one writes a redacted `Debug`
/// representation, so a token never reaches logs through a `{:?}` format.
/// There is intentionally no `Display` impl.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a token, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the raw token for use in an authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single CLI invocation.
///
/// Generated fresh for every run and recorded on the root tracing span so all
/// diagnostics from one invocation can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(Uuid);

impl InvocationId {
    /// Generates a new random invocation identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
