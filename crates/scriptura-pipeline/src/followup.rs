//! Follow-up resolution.
//!
//! Rewrites an elliptical new message ("it", "tell me more") using the
//! subject of the previous assistant turn. Resolution never fails
//! loudly: with no prior turn or no extractable subject the message
//! passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use scriptura_core::{AnswerKind, ConversationTurn, Role};

static CONTINUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:what about|tell me more|more about|explain|and|also|what else|more details|give me more)|\b(?:it|that|this|he|she|they|them|him|her)\b",
    )
    .expect("continuation regex is valid")
});

static ASK_MORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:tell me more|give me more|more details|more info)")
        .expect("ask-more regex is valid")
});

static PRONOUN_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:it|that|this|he|she|they|tell me more|give me more|more details|more info|what about|more about|and|also)\b",
    )
    .expect("pronoun-lead regex is valid")
});

/// Context inherited from the previous answer turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Inherited {
    pub kind: Option<AnswerKind>,
    pub subject: String,
}

/// The resolved message, plus inherited context when a rewrite happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub text: String,
    pub inherited: Option<Inherited>,
}

impl Resolution {
    fn passthrough(message: &str) -> Self {
        Self {
            text: message.to_string(),
            inherited: None,
        }
    }

    /// Whether the inherited context carries a given answer kind.
    pub fn inherits(&self, kind: AnswerKind) -> bool {
        self.inherited
            .as_ref()
            .map(|i| i.kind == Some(kind))
            .unwrap_or(false)
    }
}

/// Resolve a possibly-elliptical message against the conversation tail.
pub fn resolve(message: &str, history: &[ConversationTurn]) -> Resolution {
    if history.is_empty() || !CONTINUATION.is_match(message) {
        return Resolution::passthrough(message);
    }

    let Some(last_assistant) = history.iter().rev().find(|t| t.role == Role::Assistant) else {
        return Resolution::passthrough(message);
    };

    let Some(subject) = extract_subject(last_assistant) else {
        return Resolution::passthrough(message);
    };

    let text = if ASK_MORE.is_match(message) {
        format!("Tell me more about {subject}")
    } else if PRONOUN_LEAD.is_match(message) {
        format!("{subject} {message}")
    } else {
        return Resolution::passthrough(message);
    };

    debug!(resolved = %text, subject = %subject, "follow-up resolved");
    Resolution {
        text,
        inherited: Some(Inherited {
            kind: last_assistant.metadata.kind,
            subject,
        }),
    }
}

/// Subject priority: resolved location, then dictionary headword, then
/// the first line of a lookup answer, then the first citation.
fn extract_subject(turn: &ConversationTurn) -> Option<String> {
    let meta = &turn.metadata;

    if meta.kind == Some(AnswerKind::MapLocation) {
        if let Some(location) = &meta.location {
            return Some(location.clone());
        }
    }
    if let Some(headword) = &meta.headword {
        return Some(headword.clone());
    }
    if matches!(
        meta.kind,
        Some(AnswerKind::PersonLookup) | Some(AnswerKind::DefinitionLookup)
    ) {
        let first_line = turn.content.lines().next().unwrap_or_default().trim();
        if !first_line.is_empty() {
            return Some(first_line.to_string());
        }
    }
    turn.citations.first().map(|c| c.reference.clone())
}
