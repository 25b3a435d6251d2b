//! Environment configuration for the identity provider.

/// Environment variable holding the provider base URL.
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the publishable anon key.
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Identity provider settings (base URL + anon key).
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
}

impl IdentityConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Read provider settings from the environment.
    ///
    /// Missing configuration is logged and yields `None`: the application
    /// keeps running with authentication unavailable, it does not abort.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(SUPABASE_URL_VAR).ok().filter(|v| !v.is_empty());
        let anon_key = std::env::var(SUPABASE_ANON_KEY_VAR)
            .ok()
            .filter(|v| !v.is_empty());

        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Some(Self { url, anon_key }),
            _ => {
                tracing::error!(
                    "{SUPABASE_URL_VAR} / {SUPABASE_ANON_KEY_VAR} not set; identity provider unavailable"
                );
                None
            }
        }
    }
}
