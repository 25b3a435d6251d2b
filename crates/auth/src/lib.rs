//! `clinica-auth` — pure authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models
//! roles, resolved identities and the external identity-provider seam.
//! Concrete provider adapters live in `clinica-infra`.

pub mod identity;
pub mod provider;
pub mod role;

pub use identity::AuthenticatedUser;
pub use provider::{AuthError, IdentityProvider, ProviderSession, SignUpOutcome};
pub use role::Role;
