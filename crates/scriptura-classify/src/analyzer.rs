//! Grammar-level question analysis.
//!
//! A lightweight structural pass over the question (question word,
//! subject, verb, well-formedness) used to catch input not worth
//! classifying — single fragments, rambling run-ons, stacked question
//! words — and hand back a usable suggestion instead of a bad answer.

use serde::Serialize;

const QUESTION_WORDS: &[(&str, &str, bool)] = &[
    // (word, type, requires a subject)
    ("who", "person", true),
    ("what", "thing/definition", false),
    ("where", "location", true),
    ("when", "time", true),
    ("why", "reason", true),
    ("how", "method/degree", false),
    ("which", "choice", true),
    ("whose", "possession", true),
];

const AUX_AND_PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "to", "from", "with", "by", "about", "for", "of", "is", "are", "was",
    "were", "do", "does", "did",
];

const COMMON_VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done", "doing",
    "have", "has", "had", "having", "can", "could", "may", "might", "must", "shall", "should",
    "will", "would", "say", "said", "tell", "told", "mean", "meant", "go", "went", "come",
    "came", "happen", "happened",
];

const DOMAIN_KEYWORDS: &[&str] = &[
    "bible", "scripture", "verse", "god", "jesus", "christ", "lord", "testament", "david",
    "moses", "paul", "peter", "abraham", "israel", "jerusalem", "church", "apostle", "prophet",
    "king", "priest", "temple", "covenant",
];

/// Structural analysis of one question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionAnalysis {
    pub question_type: &'static str,
    pub question_word: Option<&'static str>,
    pub subject: Option<String>,
    pub verb: Option<String>,
    pub is_well_formed: bool,
    pub confidence: f64,
    pub can_answer: bool,
    pub suggestion: Option<String>,
}

/// A pre-retrieval request for the user to restate their question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarificationRequest {
    pub message: String,
    pub suggestion: String,
}

/// Analyze the structure and answerability of a question.
pub fn analyze(question: &str) -> QuestionAnalysis {
    let normalized = question.trim().to_lowercase();

    let mut question_type = "statement";
    let mut question_word = None;
    for (word, kind, _) in QUESTION_WORDS {
        if normalized.starts_with(&format!("{word} ")) || normalized == *word {
            question_type = kind;
            question_word = Some(*word);
            break;
        }
    }

    let subject = extract_subject(&normalized, question_word);
    let verb = extract_verb(&normalized);
    let is_well_formed = assess_well_formedness(&normalized, question_type, subject.as_deref());
    let confidence = score(&normalized, subject.as_deref(), verb.as_deref(), is_well_formed);

    let suggestion = if is_well_formed {
        None
    } else {
        Some(suggestion_for(&normalized, question_type))
    };

    QuestionAnalysis {
        question_type,
        question_word,
        subject,
        verb,
        is_well_formed,
        confidence,
        can_answer: confidence > 0.4,
        suggestion,
    }
}

/// A clarification request when the question is not worth answering;
/// `None` means the pipeline should proceed.
pub fn clarification_request(question: &str) -> Option<ClarificationRequest> {
    let analysis = analyze(question);

    if !analysis.is_well_formed {
        if let Some(suggestion) = analysis.suggestion {
            return Some(ClarificationRequest {
                message: format!("I don't quite understand your question. {suggestion}"),
                suggestion,
            });
        }
    }

    if analysis.confidence < 0.4 {
        return Some(ClarificationRequest {
            message: "I'm not sure I understand. Could you try rephrasing your question with \
                      more detail?"
                .to_string(),
            suggestion: "Try asking about a specific person, place, or topic from the Bible."
                .to_string(),
        });
    }

    None
}

fn extract_subject(normalized: &str, question_word: Option<&str>) -> Option<String> {
    let mut remaining = normalized;
    if let Some(word) = question_word {
        remaining = remaining.strip_prefix(word).unwrap_or(remaining).trim_start();
    }

    // Skip one leading auxiliary and one article.
    let mut words = remaining.split_whitespace().peekable();
    if let Some(first) = words.peek() {
        if COMMON_VERBS.contains(first) {
            words.next();
        }
    }
    if let Some(first) = words.peek() {
        if ["the", "a", "an"].contains(first) {
            words.next();
        }
    }

    let mut subject = Vec::new();
    for word in words.take(5) {
        if AUX_AND_PREPOSITIONS.contains(&word) {
            break;
        }
        subject.push(word);
    }

    if subject.is_empty() {
        None
    } else {
        Some(subject.join(" "))
    }
}

fn extract_verb(normalized: &str) -> Option<String> {
    normalized
        .split_whitespace()
        .find(|w| COMMON_VERBS.contains(w))
        .map(str::to_string)
}

fn assess_well_formedness(normalized: &str, question_type: &str, subject: Option<&str>) -> bool {
    if normalized.len() < 3 {
        return false;
    }

    // A single word is only acceptable when it is itself a question word.
    if !normalized.contains(' ')
        && !["why", "how", "where", "when", "what", "who"].contains(&normalized)
    {
        return false;
    }

    // A question word that demands a subject must have one.
    if question_type != "statement" && question_type != "thing/definition" && subject.is_none() {
        return false;
    }

    // Stacked question words read as rambling.
    let question_word_count = normalized
        .split_whitespace()
        .filter(|w| ["who", "what", "where", "when", "why", "how", "which"].contains(w))
        .count();
    question_word_count <= 2
}

fn score(normalized: &str, subject: Option<&str>, verb: Option<&str>, well_formed: bool) -> f64 {
    let mut confidence: f64 = 0.5;

    if well_formed {
        confidence += 0.2;
    }
    if subject.map(|s| s.len() > 2).unwrap_or(false) {
        confidence += 0.2;
    }
    if verb.is_some() {
        confidence += 0.1;
    }

    let word_count = normalized.split_whitespace().count();
    if (3..=20).contains(&word_count) {
        confidence += 0.1;
    } else if word_count > 30 {
        confidence -= 0.2;
    }

    if DOMAIN_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        confidence += 0.1;
    }

    confidence.clamp(0.0, 1.0)
}

fn suggestion_for(normalized: &str, question_type: &str) -> String {
    if normalized.split_whitespace().count() < 2 {
        return "Try asking a complete question. For example: 'What is [topic]?' or 'Who is \
                [person]?'"
            .to_string();
    }
    if question_type == "statement" {
        return "Try starting with a question word like 'What', 'Who', 'Where', 'When', 'Why', \
                or 'How'."
            .to_string();
    }
    "Try rephrasing your question with more detail. For example: 'What does the Bible say \
     about [topic]?'"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_question_passes() {
        let a = analyze("Who was Melchizedek in the Bible?");
        assert!(a.is_well_formed);
        assert!(a.can_answer);
        assert_eq!(a.question_word, Some("who"));
        assert_eq!(a.subject.as_deref(), Some("melchizedek"));
        assert!(clarification_request("Who was Melchizedek in the Bible?").is_none());
    }

    #[test]
    fn single_fragment_is_rejected() {
        let req = clarification_request("x").unwrap();
        assert!(req.message.contains("don't quite understand"));
    }

    #[test]
    fn stacked_question_words_are_rejected() {
        let a = analyze("who what where when did this happen");
        assert!(!a.is_well_formed);
    }

    #[test]
    fn reference_text_is_not_flagged() {
        assert!(clarification_request("John 3:16").is_none());
    }

    #[test]
    fn domain_keywords_raise_confidence() {
        let with = analyze("what does the bible teach here");
        let without = analyze("what does the manual teach here");
        assert!(with.confidence > without.confidence);
    }
}
