//! Per-query caller context.

use scriptura_core::{ConversationTurn, TranslationId, Verse};

/// Progress figures supplied by the caller. Progress tracking itself is
/// an external collaborator; the pipeline only formats what it is given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserStats {
    pub current_streak: u32,
    pub total_xp: u64,
    pub total_quizzes: u32,
    /// Percentage in [0, 100].
    pub accuracy: f64,
}

/// Everything a caller can hand the orchestrator alongside the message.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub user_id: Option<String>,
    pub selected_translation: Option<TranslationId>,
    /// The conversation so far; the pipeline reads only the tail.
    pub conversation_history: Vec<ConversationTurn>,
    /// Verses the caller has already shown the user.
    pub verse_history: Vec<Verse>,
    pub user_stats: Option<UserStats>,
}

impl QueryContext {
    pub fn with_translation(translation: TranslationId) -> Self {
        Self {
            selected_translation: Some(translation),
            ..Self::default()
        }
    }
}
