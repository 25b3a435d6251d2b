use std::sync::RwLock;

use clinica_scheduling::ScheduleData;

use super::{ScheduleRepository, StoreError};

/// In-memory single-key blob store, the browser-localStorage analogue.
///
/// Intended for tests/dev. The blob is kept serialized so load/save exercise
/// the same serde path as the file store.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    blob: RwLock<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored blob, for assertions.
    pub fn raw(&self) -> Option<String> {
        self.blob.read().ok().and_then(|guard| guard.clone())
    }
}

impl ScheduleRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<ScheduleData>, StoreError> {
        let guard = self.blob.read().map_err(|_| StoreError::Poisoned)?;
        match guard.as_deref() {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&self, data: &ScheduleData) -> Result<(), StoreError> {
        let blob = serde_json::to_string(data)?;
        *self.blob.write().map_err(|_| StoreError::Poisoned)? = Some(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().unwrap().is_none());
        assert!(repo.raw().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = InMemoryRepository::new();
        let data = ScheduleData::seed();

        repo.save(&data).unwrap();
        assert_eq!(repo.load().unwrap().unwrap(), data);
    }

    #[test]
    fn save_replaces_the_whole_blob() {
        let repo = InMemoryRepository::new();
        repo.save(&ScheduleData::seed()).unwrap();
        repo.save(&ScheduleData::default()).unwrap();

        assert_eq!(repo.load().unwrap().unwrap(), ScheduleData::default());
    }
}
