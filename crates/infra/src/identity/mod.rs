//! Identity-provider adapters behind [`clinica_auth::IdentityProvider`].

pub mod gotrue;
pub mod in_memory;

pub use gotrue::GoTrueProvider;
pub use in_memory::InMemoryProvider;
