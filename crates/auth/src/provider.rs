//! External identity-provider seam.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Success payload of a provider sign-in: the session the application holds
/// on to for the rest of the browser/process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSession {
    /// Provider-issued user identifier (opaque to the domain).
    pub user_id: String,
    pub email: Option<String>,
    /// Bearer token used for follow-up calls (sign-out).
    pub access_token: String,
}

/// Outcome of a sign-up call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider created a session right away.
    Session(ProviderSession),
    /// Account created; the provider requires email confirmation before a
    /// session exists.
    ConfirmationRequired,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Error message passed through from the provider, verbatim.
    #[error("{0}")]
    Provider(String),

    /// The provider could not be reached.
    #[error("identity provider unreachable: {0}")]
    Network(String),

    /// Provider URL/key not configured; authentication is unavailable but
    /// the application keeps running.
    #[error("identity provider is not configured")]
    NotConfigured,
}

/// External identity boundary: sign-in, sign-up, sign-out.
///
/// These are the only suspending operations in the system. There is no
/// retry and no timeout beyond the transport's own; a failed call surfaces
/// its error and leaves all state unchanged.
pub trait IdentityProvider {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<ProviderSession, AuthError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<SignUpOutcome, AuthError>>;

    fn sign_out(&self, access_token: &str) -> impl Future<Output = Result<(), AuthError>>;
}
