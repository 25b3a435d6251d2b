//! Monthly revenue aggregation, grouped by professional.

use core::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use clinica_core::{DomainError, DomainResult, ProfessionalId};
use clinica_scheduling::{AppointmentStatus, ScheduleData};

/// Calendar month a financial report is computed for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportMonth {
    pub year: i32,
    pub month: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> DomainResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!(
                "month out of range: {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn current(now: DateTime<Utc>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant.year() == self.year && instant.month() == self.month
    }
}

impl FromStr for ReportMonth {
    type Err = DomainError;

    /// Parses the `YYYY-MM` form used by month pickers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| DomainError::validation(format!("expected YYYY-MM, got '{s}'")))?;
        let year = year
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid year in '{s}'")))?;
        let month = month
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid month in '{s}'")))?;
        Self::new(year, month)
    }
}

impl core::fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One report row: a professional's completed consultations for the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRow {
    pub professional_id: ProfessionalId,
    pub name: String,
    pub specialty: String,
    pub completed_count: usize,
    /// Sum of completed appointment fees, in cents.
    pub total_revenue: i64,
    /// `total_revenue / completed_count` in cents; `0.0` when nothing was
    /// completed.
    pub average_ticket: f64,
}

/// Aggregates completed appointments whose `start` falls in `month`, grouped
/// by professional and sorted descending by revenue. Professionals without
/// completed appointments still get a (zero) row, so the report always shows
/// the whole roster.
pub fn monthly_revenue(data: &ScheduleData, month: ReportMonth) -> Vec<RevenueRow> {
    let in_month: Vec<_> = data
        .appointments
        .iter()
        .filter(|a| month.contains(a.start))
        .collect();

    let mut rows: Vec<RevenueRow> = data
        .professionals
        .iter()
        .map(|prof| {
            let completed: Vec<_> = in_month
                .iter()
                .filter(|a| {
                    a.professional_id == prof.id && a.status == AppointmentStatus::Completed
                })
                .collect();

            let completed_count = completed.len();
            let total_revenue: i64 = completed.iter().map(|a| a.price).sum();
            let average_ticket = if completed_count > 0 {
                total_revenue as f64 / completed_count as f64
            } else {
                0.0
            };

            RevenueRow {
                professional_id: prof.id,
                name: prof.name.clone(),
                specialty: prof.specialty.clone(),
                completed_count,
                total_revenue,
                average_ticket,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clinica_scheduling::{
        AddProfessional, BookAppointment, ScheduleData, UpdateAppointmentStatus,
    };
    use proptest::prelude::*;

    fn clinic() -> ScheduleData {
        ScheduleData::default()
            .add_professional(AddProfessional {
                name: "Dra. Ana Souza".to_string(),
                specialty: "Cardiologia".to_string(),
                consultation_price: Some(25_000),
            })
            .add_professional(AddProfessional {
                name: "Dr. Carlos Lima".to_string(),
                specialty: "Dermatologia".to_string(),
                consultation_price: Some(18_000),
            })
    }

    fn book_completed(
        data: ScheduleData,
        professional_index: usize,
        start: DateTime<Utc>,
    ) -> ScheduleData {
        let professional_id = data.professionals[professional_index].id;
        let data = data.book_appointment(BookAppointment {
            professional_id,
            patient_name: "Maria Silva".to_string(),
            start,
            end: start + chrono::Duration::minutes(30),
        });
        let appointment_id = data.appointments.last().unwrap().id;
        data.update_appointment_status(UpdateAppointmentStatus {
            appointment_id,
            status: AppointmentStatus::Completed,
        })
    }

    fn may(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn report_month_parses_and_displays() {
        let month: ReportMonth = "2024-05".parse().unwrap();
        assert_eq!(month, ReportMonth::new(2024, 5).unwrap());
        assert_eq!(month.to_string(), "2024-05");

        assert!("2024".parse::<ReportMonth>().is_err());
        assert!("2024-13".parse::<ReportMonth>().is_err());
        assert!("abcd-05".parse::<ReportMonth>().is_err());
    }

    #[test]
    fn month_boundaries_are_inclusive() {
        let month = ReportMonth::new(2024, 5).unwrap();
        let first = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let last = Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert!(month.contains(first));
        assert!(month.contains(last));
        assert!(!month.contains(before));
        assert!(!month.contains(after));
    }

    #[test]
    fn only_completed_appointments_in_month_count() {
        let month = ReportMonth::new(2024, 5).unwrap();
        let data = clinic();
        let prof_id = data.professionals[0].id;

        // Completed in May, completed in June, merely scheduled in May.
        let data = book_completed(data, 0, may(2, 10));
        let data = book_completed(data, 0, Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap());
        let data = data.book_appointment(BookAppointment {
            professional_id: prof_id,
            patient_name: "João Pedro".to_string(),
            start: may(3, 10),
            end: may(3, 11),
        });

        let rows = monthly_revenue(&data, month);
        let row = rows.iter().find(|r| r.professional_id == prof_id).unwrap();
        assert_eq!(row.completed_count, 1);
        assert_eq!(row.total_revenue, 25_000);
        assert_eq!(row.average_ticket, 25_000.0);
    }

    #[test]
    fn rows_are_sorted_by_revenue_descending() {
        let month = ReportMonth::new(2024, 5).unwrap();
        // Two completed consultations for the cheaper professional, one for
        // the expensive one: 36_000 beats 25_000.
        let data = clinic();
        let data = book_completed(data, 1, may(2, 9));
        let data = book_completed(data, 1, may(2, 11));
        let data = book_completed(data, 0, may(3, 9));

        let rows = monthly_revenue(&data, month);
        assert_eq!(rows[0].name, "Dr. Carlos Lima");
        assert_eq!(rows[0].total_revenue, 36_000);
        assert_eq!(rows[1].name, "Dra. Ana Souza");
        assert_eq!(rows[1].total_revenue, 25_000);
    }

    #[test]
    fn idle_professionals_get_zero_rows() {
        let month = ReportMonth::new(2024, 5).unwrap();
        let rows = monthly_revenue(&clinic(), month);

        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.completed_count, 0);
            assert_eq!(row.total_revenue, 0);
            assert_eq!(row.average_ticket, 0.0);
        }
    }

    proptest! {
        #[test]
        fn average_ticket_times_count_recovers_revenue(completed in 0usize..8) {
            let month = ReportMonth::new(2024, 5).unwrap();
            let mut data = clinic();
            for i in 0..completed {
                data = book_completed(data, 0, may(1 + i as u32, 9));
            }

            let rows = monthly_revenue(&data, month);
            let row = rows.iter().find(|r| r.name == "Dra. Ana Souza").unwrap();
            prop_assert_eq!(row.completed_count, completed);
            let recovered = row.average_ticket * row.completed_count as f64;
            prop_assert!((recovered - row.total_revenue as f64).abs() < 1e-6);
        }
    }
}
