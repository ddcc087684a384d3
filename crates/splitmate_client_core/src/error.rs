//! Error taxonomy for the two authentication paths. Both paths surface
//! through the same `SubmitOutcome::Failed` contract.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The document-store write failed (network error or non-success status).
    Remote(String),
    /// The federated identity provider rejected or aborted the sign-in.
    Provider(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Remote(msg) => write!(f, "Could not create your account: {}", msg),
            AuthError::Provider(msg) => write!(f, "Sign-in with the provider failed: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}
