//! Infrastructure layer: persistence, identity adapters, config, assistant
//! wiring.

pub mod assistant;
pub mod config;
pub mod identity;
pub mod repository;
pub mod schedule_store;

pub use config::IdentityConfig;
pub use identity::{GoTrueProvider, InMemoryProvider};
pub use repository::{InMemoryRepository, JsonFileRepository, ScheduleRepository, StoreError};
pub use schedule_store::ScheduleStore;
