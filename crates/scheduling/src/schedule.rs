//! The schedule aggregate and its mutation operations.
//!
//! Operations take the aggregate by value and return the next state; there
//! is no in-place mutation entry point. Lookup misses are silent no-ops and
//! no operation fails, so the aggregate can never be left half-updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinica_core::entity::replace_by_id;
use clinica_core::{AppointmentId, PatientId, ProfessionalId};

use crate::appointment::{Appointment, AppointmentStatus};
use crate::patient::Patient;
use crate::professional::{FALLBACK_CONSULTATION_PRICE, Professional, ProfessionalPatch};

/// Command: book a consultation slot.
///
/// The patient is resolved by normalized name, created when absent. No
/// overlap check is made against existing appointments for the same
/// professional or patient; double booking is possible (known gap, see
/// DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointment {
    pub professional_id: ProfessionalId,
    pub patient_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Command: replace the free-text notes of an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAppointmentNotes {
    pub appointment_id: AppointmentId,
    pub notes: String,
}

/// Command: set an appointment to `cancelled`, whatever its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAppointment {
    pub appointment_id: AppointmentId,
}

/// Command: set an appointment status, with no transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAppointmentStatus {
    pub appointment_id: AppointmentId,
    pub status: AppointmentStatus,
}

/// Command: shallow-merge profile fields into a professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfessionalProfile {
    pub professional_id: ProfessionalId,
    pub patch: ProfessionalPatch,
}

/// Command: register a new professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProfessional {
    pub name: String,
    pub specialty: String,
    pub consultation_price: Option<i64>,
}

/// Command: remove a professional and every appointment referencing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProfessional {
    pub professional_id: ProfessionalId,
}

/// All mutations of the schedule aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleCommand {
    BookAppointment(BookAppointment),
    UpdateAppointmentNotes(UpdateAppointmentNotes),
    CancelAppointment(CancelAppointment),
    UpdateAppointmentStatus(UpdateAppointmentStatus),
    UpdateProfessionalProfile(UpdateProfessionalProfile),
    AddProfessional(AddProfessional),
    DeleteProfessional(DeleteProfessional),
}

impl ScheduleCommand {
    /// Stable command label for structured logging.
    pub fn command_type(&self) -> &'static str {
        match self {
            ScheduleCommand::BookAppointment(_) => "scheduling.appointment.book",
            ScheduleCommand::UpdateAppointmentNotes(_) => "scheduling.appointment.update_notes",
            ScheduleCommand::CancelAppointment(_) => "scheduling.appointment.cancel",
            ScheduleCommand::UpdateAppointmentStatus(_) => "scheduling.appointment.update_status",
            ScheduleCommand::UpdateProfessionalProfile(_) => {
                "scheduling.professional.update_profile"
            }
            ScheduleCommand::AddProfessional(_) => "scheduling.professional.add",
            ScheduleCommand::DeleteProfessional(_) => "scheduling.professional.delete",
        }
    }
}

/// The whole clinic state, persisted and replaced as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleData {
    pub professionals: Vec<Professional>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
}

impl ScheduleData {
    /// Built-in dataset used when no stored schedule exists yet.
    pub fn seed() -> Self {
        Self {
            professionals: vec![
                Professional::new("Dra. Ana Souza", "Cardiologia", Some(25_000)),
                Professional::new("Dr. Carlos Lima", "Dermatologia", Some(18_000)),
                Professional::new("Dra. Beatriz Rocha", "Clínica Geral", None),
            ],
            patients: Vec::new(),
            appointments: Vec::new(),
        }
    }

    pub fn professional(&self, id: ProfessionalId) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    pub fn patient_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.matches_name(name))
    }

    pub fn appointments_for_professional(&self, id: ProfessionalId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.professional_id == id)
            .collect()
    }

    pub fn appointments_for_patient(&self, id: PatientId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_id == id)
            .collect()
    }

    /// Dispatches one command to its operation.
    pub fn apply(self, command: ScheduleCommand) -> Self {
        match command {
            ScheduleCommand::BookAppointment(cmd) => self.book_appointment(cmd),
            ScheduleCommand::UpdateAppointmentNotes(cmd) => self.update_appointment_notes(cmd),
            ScheduleCommand::CancelAppointment(cmd) => self.cancel_appointment(cmd),
            ScheduleCommand::UpdateAppointmentStatus(cmd) => self.update_appointment_status(cmd),
            ScheduleCommand::UpdateProfessionalProfile(cmd) => {
                self.update_professional_profile(cmd)
            }
            ScheduleCommand::AddProfessional(cmd) => self.add_professional(cmd),
            ScheduleCommand::DeleteProfessional(cmd) => self.delete_professional(cmd),
        }
    }

    /// Books an appointment, resolving or creating the patient by normalized
    /// name. The fee is copied from the professional at this point; when the
    /// professional is unknown or has no configured price, the fallback fee
    /// applies. The new appointment always starts as `scheduled`.
    pub fn book_appointment(mut self, cmd: BookAppointment) -> Self {
        let patient = match self.patient_by_name(&cmd.patient_name) {
            Some(existing) => existing.clone(),
            None => {
                let created = Patient::new(&cmd.patient_name);
                self.patients.push(created.clone());
                created
            }
        };

        let price = self
            .professional(cmd.professional_id)
            .map(Professional::booking_price)
            .unwrap_or(FALLBACK_CONSULTATION_PRICE);

        self.appointments.push(Appointment {
            id: AppointmentId::new(),
            professional_id: cmd.professional_id,
            patient_id: patient.id,
            patient_name: patient.name,
            start: cmd.start,
            end: cmd.end,
            status: AppointmentStatus::Scheduled,
            price,
            notes: None,
        });
        self
    }

    pub fn update_appointment_notes(mut self, cmd: UpdateAppointmentNotes) -> Self {
        self.appointments = replace_by_id(self.appointments, &cmd.appointment_id, |appt| {
            Appointment {
                notes: Some(cmd.notes.clone()),
                ..appt
            }
        });
        self
    }

    pub fn cancel_appointment(mut self, cmd: CancelAppointment) -> Self {
        self.appointments = replace_by_id(self.appointments, &cmd.appointment_id, |appt| {
            Appointment {
                status: AppointmentStatus::Cancelled,
                ..appt
            }
        });
        self
    }

    pub fn update_appointment_status(mut self, cmd: UpdateAppointmentStatus) -> Self {
        self.appointments = replace_by_id(self.appointments, &cmd.appointment_id, |appt| {
            Appointment {
                status: cmd.status,
                ..appt
            }
        });
        self
    }

    pub fn update_professional_profile(mut self, cmd: UpdateProfessionalProfile) -> Self {
        self.professionals = replace_by_id(self.professionals, &cmd.professional_id, |prof| {
            cmd.patch.clone().apply(prof)
        });
        self
    }

    pub fn add_professional(mut self, cmd: AddProfessional) -> Self {
        self.professionals.push(Professional::new(
            cmd.name,
            cmd.specialty,
            cmd.consultation_price,
        ));
        self
    }

    /// Removes the professional and cascades to every appointment that
    /// references them. Appointments of other professionals are untouched.
    pub fn delete_professional(mut self, cmd: DeleteProfessional) -> Self {
        self.professionals
            .retain(|p| p.id != cmd.professional_id);
        self.appointments
            .retain(|a| a.professional_id != cmd.professional_id);
        self
    }
}
