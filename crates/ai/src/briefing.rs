//! Deterministic schedule briefing for the admin dashboard.

use serde::{Deserialize, Serialize};
use serde_json::json;

use clinica_core::money::format_brl;

use crate::job::AssistantJob;
use crate::reply::{AssistantError, AssistantReply};

/// Plain-numbers view of the schedule, prepared by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// `YYYY-MM` label of the month the revenue figure refers to.
    pub reference_month: String,
    pub professional_count: usize,
    pub patient_count: usize,
    pub scheduled: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Revenue of completed consultations in the reference month, in cents.
    pub month_revenue_cents: i64,
}

/// Renders a short pt-BR briefing over a snapshot.
#[derive(Debug, Clone)]
pub struct BriefingJob {
    snapshot: ScheduleSnapshot,
}

impl BriefingJob {
    pub fn new(snapshot: ScheduleSnapshot) -> Self {
        Self { snapshot }
    }
}

impl AssistantJob for BriefingJob {
    type Input = ScheduleSnapshot;

    fn input(&self) -> &ScheduleSnapshot {
        &self.snapshot
    }

    fn run(&self) -> Result<AssistantReply, AssistantError> {
        let s = &self.snapshot;
        if s.month_revenue_cents < 0 {
            return Err(AssistantError::InvalidInput(
                "negative revenue in snapshot".to_string(),
            ));
        }

        let text = format!(
            "Resumo da agenda ({}): {} profissionais, {} pacientes.\n\
             Consultas: agendadas {}, confirmadas {}, concluídas {}, canceladas {}.\n\
             Receita do mês (consultas concluídas): {}.",
            s.reference_month,
            s.professional_count,
            s.patient_count,
            s.scheduled,
            s.confirmed,
            s.completed,
            s.cancelled,
            format_brl(s.month_revenue_cents),
        );

        Ok(AssistantReply::new(text).with_metadata(json!({
            "job": "briefing",
            "reference_month": s.reference_month,
            "completed": s.completed,
            "month_revenue_cents": s.month_revenue_cents,
        })))
    }
}
