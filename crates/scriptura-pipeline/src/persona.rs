//! Response personality layer.
//!
//! Adds a rotating greeting, an engagement invitation, and contextual
//! framing notes on top of the factual answer body. Rotation is a
//! deterministic round-robin per category so repeated questions do not
//! repeat greetings.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use scriptura_core::{
    Answer, AnswerKind, AnswerMetadata, Category, Classification,
};

const BIOGRAPHICAL: &[&str] = &[
    "Let me walk with you through {topic}.",
    "Let's explore who {topic} was in the biblical narrative.",
    "Here's the story of {topic}.",
    "Let me introduce you to {topic}.",
    "Let's unpack {topic}'s role in Scripture.",
    "Here's the biblical account of {topic}.",
];

const DEFINITION: &[&str] = &[
    "Let me explain what {topic} means.",
    "Here's the definition of {topic}.",
    "Let's get clear on {topic}.",
    "Here's what you need to know about {topic}.",
    "Let me break down {topic} for you.",
    "Ready to understand {topic}?",
];

const INTERPRETATION: &[&str] = &[
    "Let me unpack {topic} for you.",
    "Let's break down {topic}.",
    "Here's what's happening with {topic}.",
    "Let's make sense of {topic}.",
    "Here's what {topic} is really about.",
    "Let me walk you through {topic}.",
];

const WORD_STUDY: &[&str] = &[
    "Let's dig into the original language of {topic}.",
    "Here's what {topic} means in the original.",
    "Let me show you the original meaning of {topic}.",
    "Let's unpack the language of {topic}.",
    "Here's the linguistic key to {topic}.",
];

const HISTORICAL: &[&str] = &[
    "Let me set the historical scene for {topic}.",
    "Here's the backdrop to {topic}.",
    "Let's dive into the context of {topic}.",
    "Here's the cultural landscape of {topic}.",
    "Let's understand {topic} in its time.",
];

const THEOLOGICAL: &[&str] = &[
    "Let's explore the theology of {topic}.",
    "Here's what Scripture teaches about {topic}.",
    "Let me unpack the doctrine of {topic}.",
    "Here's the biblical perspective on {topic}.",
    "Let's examine {topic} through a biblical lens.",
];

const PAUL: &[&str] = &[
    "Let's explore what Paul said about {topic}.",
    "Here's Paul's perspective on {topic}.",
    "Let me explain Paul's teaching on {topic}.",
    "Here's how Paul addressed {topic}.",
    "Let's understand Paul on {topic}.",
];

const GENERAL: &[&str] = &[
    "Let's dive into {topic}.",
    "Here's what you need to know about {topic}.",
    "Time to explore {topic}.",
    "Let me help you understand {topic}.",
    "Let me shed some light on {topic}.",
    "Let's explore {topic} together.",
];

static AMBIGUOUS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^explain this$",
        r"(?i)^what does this mean\??$",
        r"(?i)^tell me about this$",
        r"(?i)^this verse$",
        r"(?i)^what about$",
        r"(?i)^how about$",
    ]
    .iter()
    .map(|re| Regex::new(re).expect("ambiguity regex is valid"))
    .collect()
});

static PAUL_SIGNALS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bpaul\b",
        r"(?i)\bsaul\b",
        r"(?i)\bapostle to the gentiles\b",
        r"(?i)\b(?:1|2|first|second)\s*(?:corinthians?|timothy|thessalonians?)\b",
        r"(?i)\b(?:romans|galatians|ephesians|philippians|colossians|philemon|titus)\b",
    ]
    .iter()
    .map(|re| Regex::new(re).expect("paul regex is valid"))
    .collect()
});

static TOPIC_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:who is|what is|tell me about|explain|define|meaning of|who was|what was)\s+")
        .expect("topic-lead regex is valid")
});

/// Per-conversation greeting rotation state.
#[derive(Default)]
pub struct PersonaState {
    rotation: HashMap<&'static str, usize>,
}

impl PersonaState {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_greeting(&mut self, key: &'static str, topic: &str) -> String {
        let pool = pool_for(key);
        let index = self.rotation.entry(key).or_insert(0);
        let phrase = pool[*index % pool.len()];
        *index += 1;
        phrase.replace("{topic}", topic)
    }

    /// Prepend a greeting and append an engagement invitation.
    pub fn enhance(&mut self, response: String, classification: &Classification, query: &str) -> String {
        let key = greeting_key(classification);
        let topic = extract_topic(query, classification);
        let greeting = self.next_greeting(key, &topic);
        let enhanced = format!("{greeting}\n\n{response}");
        add_invitation(enhanced, classification)
    }

    /// The plain mentor voice used for feast and geography answers.
    pub fn mentor(&mut self, response: String) -> String {
        let greeting = self.next_greeting("general", "this");
        format!("{greeting}\n\n{response}")
    }
}

fn pool_for(key: &str) -> &'static [&'static str] {
    match key {
        "biographical" => BIOGRAPHICAL,
        "definition" => DEFINITION,
        "interpretation" => INTERPRETATION,
        "word_study" => WORD_STUDY,
        "historical" => HISTORICAL,
        "theological" => THEOLOGICAL,
        "paul" => PAUL,
        _ => GENERAL,
    }
}

fn greeting_key(classification: &Classification) -> &'static str {
    match (classification.category, classification.subcategory) {
        (_, Some("who")) => "biographical",
        (_, Some("what_definition")) => "definition",
        (_, Some("interpretation")) => "interpretation",
        (_, Some("language")) => "word_study",
        (Category::History, _) => "historical",
        (Category::Theology, _) => "theological",
        (Category::Paul, _) => "paul",
        _ => "general",
    }
}

/// Pull the topic out of the query for greeting interpolation.
fn extract_topic(query: &str, classification: &Classification) -> String {
    let mut topic = TOPIC_LEAD.replace(query.trim(), "").to_string();
    topic = topic.trim_end_matches('?').trim().to_string();

    // Biographical greetings want just the name.
    if classification.subcategory == Some("who") {
        if let Some(name) = topic.split_whitespace().next() {
            topic = name.to_string();
        }
    }

    if topic.is_empty() {
        return "this".to_string();
    }
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "this".to_string(),
    }
}

fn add_invitation(response: String, classification: &Classification) -> String {
    // Skip when the body already invites a follow-up.
    if response.contains("Want ") || response.contains("Would you like") || response.contains("Should I")
    {
        return response;
    }

    let invitation = match (classification.category, classification.subcategory) {
        (Category::Scripture, Some("who")) | (Category::Scripture, Some("what_definition")) => {
            "\n\n💡 Want the Greek or Hebrew on any of these references?"
        }
        (Category::Scripture, Some("interpretation")) => {
            "\n\n💡 I can go deeper into the historical context if you want."
        }
        (Category::Scripture, Some("language")) => {
            "\n\n💡 Want more word usage examples from Scripture?"
        }
        (Category::Theology, _) => {
            "\n\n💡 Want to see what the early church fathers said about this?"
        }
        (Category::History, _) => "\n\n💡 Should I unpack the cultural background further?",
        (Category::Paul, _) => "\n\n💡 Want more on Paul's first-century context?",
        _ => "",
    };

    format!("{response}{invitation}")
}

/// Whether a question is one of the fixed too-ambiguous surface forms.
pub fn detect_ambiguous(query: &str) -> bool {
    let trimmed = query.trim();
    AMBIGUOUS.iter().any(|p| p.is_match(trimmed))
}

/// The clarification prompt for ambiguous questions: five directions,
/// zero citations.
pub fn clarification_prompt() -> Answer {
    let mut metadata = AnswerMetadata::of_kind(AnswerKind::Clarification);
    metadata.needs_clarification = true;
    Answer {
        answer: "⚠️ I want to give you the best answer—could you be more specific?\n\n\
                 Would you like:\n\
                 • 📜 Historical background and cultural context\n\
                 • 🔤 Greek/Hebrew word study and linguistic analysis\n\
                 • ⛪ Early church interpretation and patristic commentary\n\
                 • 📖 Doctrinal/theological explanation\n\
                 • 💡 Practical application to daily life\n\n\
                 Just let me know which direction interests you most!"
            .to_string(),
        citations: Vec::new(),
        metadata,
    }
}

/// Whether the query concerns Paul or his letters.
pub fn detect_paul_question(query: &str) -> bool {
    PAUL_SIGNALS.iter().any(|p| p.is_match(query))
}

/// Append the Paul framing note when the query is Pauline and the
/// response lacks it.
pub fn add_paul_context(response: String, query: &str) -> String {
    let needs_context = detect_paul_question(query)
        && !response.contains("Paul was")
        && !response.contains("first-century");
    if !needs_context {
        return response;
    }
    format!(
        "{response}\n\n📖 Context: Paul was a first-century Pharisee trained under Gamaliel, \
         writing to mixed Jewish-Gentile audiences in Greco-Roman cities. Understanding his \
         Jewish background and Greco-Roman cultural setting is key to interpreting his letters."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptura_core::Confidence;

    fn who_classification() -> Classification {
        Classification {
            category: Category::Scripture,
            subcategory: Some("who"),
            confidence: Confidence::new(0.9),
            needs_clarification: false,
            keywords: Vec::new(),
            suggestion: None,
        }
    }

    #[test]
    fn greetings_rotate_without_immediate_repeats() {
        let mut state = PersonaState::new();
        let c = who_classification();
        let a = state.enhance("body".into(), &c, "Who is Paul?");
        let b = state.enhance("body".into(), &c, "Who is Paul?");
        assert_ne!(a.lines().next(), b.lines().next());
    }

    #[test]
    fn topic_is_interpolated() {
        let mut state = PersonaState::new();
        let c = who_classification();
        let out = state.enhance("body".into(), &c, "Who is Melchizedek?");
        assert!(out.contains("Melchizedek"));
    }

    #[test]
    fn ambiguous_surface_forms_detected() {
        assert!(detect_ambiguous("explain this"));
        assert!(detect_ambiguous("  what does this mean?  "));
        assert!(!detect_ambiguous("explain this verse in Romans"));
    }

    #[test]
    fn clarification_prompt_lists_directions() {
        let answer = clarification_prompt();
        assert!(answer.metadata.needs_clarification);
        assert!(answer.citations.is_empty());
        assert!(answer.answer.matches('•').count() >= 4);
    }

    #[test]
    fn paul_context_is_added_once() {
        let with = add_paul_context("short answer".into(), "why did Paul circumcise Timothy?");
        assert!(with.contains("first-century Pharisee"));
        let again = add_paul_context(with.clone(), "why did Paul circumcise Timothy?");
        assert_eq!(with, again);
    }

    #[test]
    fn invitation_respects_existing_ones() {
        let mut state = PersonaState::new();
        let c = who_classification();
        let out = state.enhance("Would you like cross-references?".into(), &c, "Who is Paul?");
        assert_eq!(out.matches("Would you like").count(), 1);
        assert!(!out.contains("💡"));
    }
}
