//! Whole-aggregate persistence.
//!
//! The entire [`ScheduleData`] is serialized as one JSON blob under one
//! fixed key and read back verbatim; there is no partial update, no schema
//! validation beyond serde, and no migration of the stored shape.

use thiserror::Error;

use clinica_scheduling::ScheduleData;

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;

/// Storage key the aggregate is persisted under.
pub const SCHEDULE_KEY: &str = "scheduleData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// One-blob store: load everything, save everything.
pub trait ScheduleRepository {
    /// Load the stored aggregate; `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<ScheduleData>, StoreError>;

    /// Serialize and store the whole aggregate, replacing any previous blob.
    fn save(&self, data: &ScheduleData) -> Result<(), StoreError>;
}
