//! Answer payload returned by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::verse::WordToken;

/// A single source citation attached to an answer.
///
/// `translation` is free-form because comparison answers cite a joined
/// list of every source that contributed (e.g. "WLC/LXX/KJV/WEB").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(rename = "ref")]
    pub reference: String,
    pub translation: String,
}

impl Citation {
    pub fn new(reference: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            translation: translation.into(),
        }
    }
}

/// What kind of answer a turn produced. Drives follow-up resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Reference,
    PersonLookup,
    DefinitionLookup,
    WordStudy,
    MapLocation,
    FeastDay,
    UserStats,
    CompareTranslations,
    PassageContext,
    Manuscript,
    Religion,
    Clarification,
    General,
}

/// Word tokens for one verse, carried in manuscript answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseWords {
    pub reference: String,
    pub words: Vec<WordToken>,
}

/// Serializable summary of a classification, small enough to embed in
/// turn metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub confidence: f64,
}

impl From<&Classification> for ClassificationSummary {
    fn from(c: &Classification) -> Self {
        Self {
            category: c.category.as_str().to_string(),
            subcategory: c.subcategory.map(str::to_string),
            confidence: c.confidence.value(),
        }
    }
}

/// Structured metadata on an answer turn. The follow-up resolver reads
/// this from the most recent assistant turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerMetadata {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnswerKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headword: Option<String>,
    #[serde(default)]
    pub needs_clarification: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub apocrypha: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manuscript_words: Vec<VerseWords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationSummary>,
}

impl AnswerMetadata {
    pub fn of_kind(kind: AnswerKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}

/// The orchestrator's result: one answer string plus citations and
/// metadata for the next turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub metadata: AnswerMetadata,
}

impl Answer {
    /// An answer with no citations and default metadata.
    pub fn plain(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            citations: Vec::new(),
            metadata: AnswerMetadata::default(),
        }
    }
}
