//! `clinica-core` — foundation building blocks for the scheduling domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AppointmentId, PatientId, ProfessionalId};
