//! Adapts the live aggregate into the assistant's snapshot input.

use clinica_ai::{AssistantError, AssistantJob, AssistantReply, BriefingJob, ScheduleSnapshot};
use clinica_reporting::{ReportMonth, monthly_revenue};
use clinica_scheduling::{AppointmentStatus, ScheduleData};

/// Build the assistant's input from the current schedule.
pub fn snapshot(data: &ScheduleData, month: ReportMonth) -> ScheduleSnapshot {
    let count =
        |status: AppointmentStatus| data.appointments.iter().filter(|a| a.status == status).count();

    let month_revenue_cents = monthly_revenue(data, month)
        .iter()
        .map(|row| row.total_revenue)
        .sum();

    ScheduleSnapshot {
        reference_month: month.to_string(),
        professional_count: data.professionals.len(),
        patient_count: data.patients.len(),
        scheduled: count(AppointmentStatus::Scheduled),
        confirmed: count(AppointmentStatus::Confirmed),
        completed: count(AppointmentStatus::Completed),
        cancelled: count(AppointmentStatus::Cancelled),
        month_revenue_cents,
    }
}

/// Run the deterministic briefing over the current schedule.
pub fn daily_briefing(
    data: &ScheduleData,
    month: ReportMonth,
) -> Result<AssistantReply, AssistantError> {
    BriefingJob::new(snapshot(data, month)).run()
}
