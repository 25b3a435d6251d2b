//! `clinica-reporting` — read-only financial views over the schedule.
//!
//! Everything here is derived on demand from a [`ScheduleData`] snapshot and
//! never persisted.
//!
//! [`ScheduleData`]: clinica_scheduling::ScheduleData

pub mod financial;
pub mod render;

pub use financial::{ReportMonth, RevenueRow, monthly_revenue};
pub use render::render_report;
