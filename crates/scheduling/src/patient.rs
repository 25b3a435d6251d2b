use serde::{Deserialize, Serialize};

use clinica_core::{Entity, PatientId};

/// Case-insensitive, whitespace-trimmed form of a patient name, used to
/// deduplicate patients on booking.
pub fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A patient, created implicitly the first time a booking is made under a
/// name not already present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
}

impl Patient {
    /// Creates a patient; the stored name is the trimmed input.
    pub fn new(name: &str) -> Self {
        Self {
            id: PatientId::new(),
            name: name.trim().to_string(),
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        normalized_name(&self.name) == normalized_name(name)
    }
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> &PatientId {
        &self.id
    }
}
