//! The store container: in-memory schedule plus its backing repository.

use tracing::{info, warn};

use clinica_scheduling::{ScheduleCommand, ScheduleData};

use crate::repository::{ScheduleRepository, StoreError};

/// Owns the aggregate for the lifetime of a session.
///
/// The aggregate is loaded once, held in memory, and flushed wholesale after
/// every mutation. All mutations go through [`ScheduleStore::dispatch`]; the
/// pure transformations themselves live in `clinica-scheduling`.
pub struct ScheduleStore<R: ScheduleRepository> {
    data: ScheduleData,
    repo: R,
}

impl<R: ScheduleRepository> ScheduleStore<R> {
    /// Load the stored aggregate, or seed the built-in defaults when storage
    /// is empty. The seed is flushed immediately so later loads see it.
    pub fn open(repo: R) -> Result<Self, StoreError> {
        let data = match repo.load()? {
            Some(data) => data,
            None => {
                let seeded = ScheduleData::seed();
                repo.save(&seeded)?;
                info!("no stored schedule found, seeded defaults");
                seeded
            }
        };
        Ok(Self { data, repo })
    }

    pub fn data(&self) -> &ScheduleData {
        &self.data
    }

    /// Apply one command and flush the whole aggregate.
    ///
    /// The in-memory state keeps the applied change even when the flush
    /// fails; the error is returned to the caller (there is no consistency
    /// guarantee between memory and storage).
    pub fn dispatch(&mut self, command: ScheduleCommand) -> Result<(), StoreError> {
        let label = command.command_type();
        let current = std::mem::take(&mut self.data);
        self.data = current.apply(command);
        info!(command = label, "schedule updated");

        if let Err(e) = self.repo.save(&self.data) {
            warn!(command = label, error = %e, "failed to flush schedule");
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use clinica_scheduling::{AddProfessional, BookAppointment};

    use crate::repository::InMemoryRepository;

    #[test]
    fn open_seeds_empty_storage_once() {
        let repo = InMemoryRepository::new();
        let store = ScheduleStore::open(repo).unwrap();
        assert_eq!(store.data().professionals.len(), 3);

        // The seed itself was flushed.
        let seeded = store.repo.load().unwrap().unwrap();
        assert_eq!(&seeded, store.data());
    }

    #[test]
    fn open_prefers_stored_state_over_seed() {
        let repo = InMemoryRepository::new();
        repo.save(&ScheduleData::default()).unwrap();

        let store = ScheduleStore::open(repo).unwrap();
        assert!(store.data().professionals.is_empty());
    }

    #[test]
    fn dispatch_applies_and_flushes() {
        let mut store = ScheduleStore::open(InMemoryRepository::new()).unwrap();
        let professional_id = store.data().professionals[0].id;

        store
            .dispatch(ScheduleCommand::BookAppointment(BookAppointment {
                professional_id,
                patient_name: "Maria Silva".to_string(),
                start: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
            }))
            .unwrap();

        assert_eq!(store.data().appointments.len(), 1);
        let flushed = store.repo.load().unwrap().unwrap();
        assert_eq!(&flushed, store.data());
    }

    #[test]
    fn every_dispatch_rewrites_the_blob() {
        let mut store = ScheduleStore::open(InMemoryRepository::new()).unwrap();
        let before = store.repo.raw().unwrap();

        store
            .dispatch(ScheduleCommand::AddProfessional(AddProfessional {
                name: "Dr. Otávio Nunes".to_string(),
                specialty: "Ortopedia".to_string(),
                consultation_price: None,
            }))
            .unwrap();

        let after = store.repo.raw().unwrap();
        assert_ne!(before, after);
    }
}
