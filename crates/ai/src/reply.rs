use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Reply produced by an assistant job.
///
/// This is *not* a domain event: a reply can be displayed or discarded by
/// higher layers without ever touching domain state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// User-facing text.
    pub text: String,

    /// Free-form metadata (counts, model name, timings, etc).
    pub metadata: JsonValue,
}

impl AssistantReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: JsonValue::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("assistant failed: {0}")]
    Failed(String),
}
