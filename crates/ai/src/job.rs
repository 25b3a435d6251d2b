use crate::reply::{AssistantError, AssistantReply};

/// A read-only assistant task over a snapshot of application data.
///
/// Jobs consume snapshots prepared by callers (infra); this crate stays
/// storage-agnostic and never sees the live aggregate.
pub trait AssistantJob {
    type Input;

    /// The snapshot the job runs on.
    fn input(&self) -> &Self::Input;

    /// Produce a reply.
    ///
    /// Must not mutate domain state.
    fn run(&self) -> Result<AssistantReply, AssistantError>;
}
