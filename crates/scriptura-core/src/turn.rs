//! Conversation history models.
//!
//! The history is owned by the caller (UI/CLI layer); the pipeline only
//! reads the tail, never mutates it.

use serde::{Deserialize, Serialize};

use crate::answer::{AnswerMetadata, Citation};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(rename = "type")]
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub metadata: AnswerMetadata,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            citations: Vec::new(),
            metadata: AnswerMetadata::default(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        citations: Vec<Citation>,
        metadata: AnswerMetadata,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            citations,
            metadata,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
