use serde::{Deserialize, Serialize};

use clinica_core::{Entity, ProfessionalId};

/// Default consultation fee in cents, charged when a professional has no
/// configured price (or no longer exists at booking time).
pub const FALLBACK_CONSULTATION_PRICE: i64 = 15_000;

/// A care professional offering consultations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub specialty: String,
    /// Per-consultation fee in cents; `None` falls back to
    /// [`FALLBACK_CONSULTATION_PRICE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_price: Option<i64>,
}

impl Professional {
    pub fn new(
        name: impl Into<String>,
        specialty: impl Into<String>,
        consultation_price: Option<i64>,
    ) -> Self {
        Self {
            id: ProfessionalId::new(),
            name: name.into(),
            specialty: specialty.into(),
            consultation_price,
        }
    }

    /// Fee copied into an appointment booked with this professional.
    pub fn booking_price(&self) -> i64 {
        self.consultation_price
            .unwrap_or(FALLBACK_CONSULTATION_PRICE)
    }
}

impl Entity for Professional {
    type Id = ProfessionalId;

    fn id(&self) -> &ProfessionalId {
        &self.id
    }
}

/// Partial update for a professional profile.
///
/// `None` fields keep the current value (shallow merge).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalPatch {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub consultation_price: Option<i64>,
}

impl ProfessionalPatch {
    pub fn apply(self, professional: Professional) -> Professional {
        Professional {
            id: professional.id,
            name: self.name.unwrap_or(professional.name),
            specialty: self.specialty.unwrap_or(professional.specialty),
            consultation_price: self.consultation_price.or(professional.consultation_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_price_falls_back_when_unset() {
        let prof = Professional::new("Dra. Ana Souza", "Cardiologia", None);
        assert_eq!(prof.booking_price(), FALLBACK_CONSULTATION_PRICE);

        let prof = Professional::new("Dra. Ana Souza", "Cardiologia", Some(20_000));
        assert_eq!(prof.booking_price(), 20_000);
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let prof = Professional::new("Dr. Carlos Lima", "Dermatologia", Some(18_000));
        let id = prof.id;

        let patched = ProfessionalPatch {
            name: None,
            specialty: Some("Dermatologia Clínica".to_string()),
            consultation_price: None,
        }
        .apply(prof);

        assert_eq!(patched.id, id);
        assert_eq!(patched.name, "Dr. Carlos Lima");
        assert_eq!(patched.specialty, "Dermatologia Clínica");
        assert_eq!(patched.consultation_price, Some(18_000));
    }

    #[test]
    fn empty_patch_is_identity() {
        let prof = Professional::new("Dr. Carlos Lima", "Dermatologia", Some(18_000));
        let patched = ProfessionalPatch::default().apply(prof.clone());
        assert_eq!(patched, prof);
    }
}
