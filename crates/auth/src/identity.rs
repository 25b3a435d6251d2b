use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderSession;
use crate::role::Role;

/// An identity the application has resolved, with its role fixed at
/// session-establishment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: Option<String>,
    pub role: Role,
    pub authenticated_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    /// Resolve a provider session into an application identity.
    ///
    /// The role claim is decided here, once. Later authorization checks read
    /// this value instead of re-deriving a role from session presence.
    pub fn from_session(role: Role, session: &ProviderSession, now: DateTime<Utc>) -> Self {
        Self {
            user_id: session.user_id.clone(),
            email: session.email.clone(),
            role,
            authenticated_at: now,
        }
    }

    /// Identity established without the external provider (professionals and
    /// patients enter through local selection, not credentials).
    pub fn local(role: Role, user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            role,
            authenticated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
