//! Credentials passed explicitly into API calls.

use serde::{Deserialize, Serialize};

/// An authenticated end user, identified by the auth provider.
///
/// Constructed by the embedding layer from its login flow and passed into
/// vote calls; the client never reads tokens from ambient storage.
#[derive(Debug, Clone)]
pub struct UserSession {
    /// Subject identifier from the auth token.
    pub user_id: String,
    /// Bearer token for the backend.
    pub token: String,
}

/// Admin credentials for the moderation endpoints.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Shared admin password, sent as the `X-Auth-Password` header.
    pub password: String,
}

/// Direction of a vote toggle.
///
/// The backend enforces toggle semantics: voting the same way twice removes
/// the vote, and a user is never in both sets at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    /// Add or remove a like.
    Like,
    /// Add or remove a dislike.
    Dislike,
}
