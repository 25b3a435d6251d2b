//! `clinica-ai`
//!
//! **Responsibility:** assistant subsystem boundary (the admin "Assistente
//! AI" tab).
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the schedule aggregate.
//! - It must not mutate domain state.
//! - It consumes **snapshots** prepared by callers and emits replies.

pub mod briefing;
pub mod job;
pub mod reply;

pub use briefing::{BriefingJob, ScheduleSnapshot};
pub use job::AssistantJob;
pub use reply::{AssistantError, AssistantReply};
