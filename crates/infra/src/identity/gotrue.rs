//! Supabase GoTrue REST adapter.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use clinica_auth::{AuthError, IdentityProvider, ProviderSession, SignUpOutcome};

use crate::config::IdentityConfig;

/// Identity provider backed by Supabase's GoTrue auth REST API.
///
/// No retry and no timeout beyond reqwest's defaults; errors carry the
/// provider's own message so the UI can show it verbatim.
#[derive(Debug, Clone)]
pub struct GoTrueProvider {
    http: Client,
    config: IdentityConfig,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: ProviderUser,
}

/// Sign-up either returns a full session or, when email confirmation is
/// required, a bare user object with no token.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    access_token: Option<String>,
    user: Option<ProviderUser>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl GoTrueProvider {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Build the provider from the environment.
    ///
    /// Fails with [`AuthError::NotConfigured`] when the URL/key are absent;
    /// callers keep the application running without authentication.
    pub fn from_env() -> Result<Self, AuthError> {
        IdentityConfig::from_env()
            .map(Self::new)
            .ok_or(AuthError::NotConfigured)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url.trim_end_matches('/'), path)
    }

    async fn provider_error(response: reqwest::Response) -> AuthError {
        let status = response.status();
        match response.bytes().await {
            Ok(bytes) => map_error_body(status, &bytes),
            Err(_) => map_error_body(status, &[]),
        }
    }
}

/// Map a non-success GoTrue response to [`AuthError::Provider`].
///
/// GoTrue is inconsistent about its error field name across endpoints, so
/// `error_description`, `msg` and `message` are tried in that order. The
/// provider's message is passed through verbatim; when the body carries none
/// of the fields or is not JSON, the status code stands in.
fn map_error_body(status: StatusCode, body: &[u8]) -> AuthError {
    let fallback = || format!("authentication failed ({status})");
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(body) => AuthError::Provider(
            body.error_description
                .or(body.msg)
                .or(body.message)
                .unwrap_or_else(fallback),
        ),
        Err(_) => AuthError::Provider(fallback()),
    }
}

impl IdentityProvider for GoTrueProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError> {
        let response = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        info!(user = %token.user.id, "provider sign-in succeeded");
        Ok(ProviderSession {
            user_id: token.user.id,
            email: token.user.email,
            access_token: token.access_token,
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let body: SignUpResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        match (body.access_token, body.user) {
            (Some(access_token), Some(user)) => Ok(SignUpOutcome::Session(ProviderSession {
                user_id: user.id,
                email: user.email,
                access_token,
            })),
            _ => Ok(SignUpOutcome::ConfirmationRequired),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }
        Ok(())
    }
}
