use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use clinica_auth::{AuthError, IdentityProvider, ProviderSession, SignUpOutcome};

#[derive(Debug, Clone)]
struct StoredAccount {
    user_id: String,
    password: String,
}

/// Deterministic identity provider for tests/dev: accounts live in process
/// memory, sessions are issued immediately (no email confirmation step).
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    accounts: Mutex<HashMap<String, StoredAccount>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn session_for(email: &str, account: &StoredAccount) -> ProviderSession {
        ProviderSession {
            user_id: account.user_id.clone(),
            email: Some(email.to_string()),
            access_token: format!("token-{}", account.user_id),
        }
    }
}

impl IdentityProvider for InMemoryProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| AuthError::Provider("provider state poisoned".to_string()))?;

        match accounts.get(email) {
            Some(account) if account.password == password => {
                Ok(Self::session_for(email, account))
            }
            // GoTrue's actual message, passed through like the real adapter.
            _ => Err(AuthError::Provider("Invalid login credentials".to_string())),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|_| AuthError::Provider("provider state poisoned".to_string()))?;

        if accounts.contains_key(email) {
            return Err(AuthError::Provider("User already registered".to_string()));
        }

        let account = StoredAccount {
            user_id: Uuid::now_v7().to_string(),
            password: password.to_string(),
        };
        let session = Self::session_for(email, &account);
        accounts.insert(email.to_string(), account);
        Ok(SignUpOutcome::Session(session))
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}
