//! `clinica-scheduling` — the schedule aggregate and its operations.
//!
//! The whole state of the clinic lives in one [`ScheduleData`] value:
//! professionals, patients and appointments, read and replaced as a unit.
//! Every mutation is a pure value-in/value-out transformation; persistence
//! and logging happen in the infrastructure layer around it.

pub mod appointment;
pub mod patient;
pub mod professional;
pub mod schedule;

pub use appointment::{Appointment, AppointmentStatus};
pub use patient::{Patient, normalized_name};
pub use professional::{FALLBACK_CONSULTATION_PRICE, Professional, ProfessionalPatch};
pub use schedule::{
    AddProfessional, BookAppointment, CancelAppointment, DeleteProfessional, ScheduleCommand,
    ScheduleData, UpdateAppointmentNotes, UpdateAppointmentStatus, UpdateProfessionalProfile,
};
