//! Pattern-taxonomy question classifier.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use scriptura_core::constants::{CLASSIFY_BASE_CONFIDENCE, CLASSIFY_SIGNAL_BOOST};
use scriptura_core::{parse_reference, Category, Classification, Confidence};

use crate::taxonomy::{AMBIGUOUS_PATTERNS, NEGATIVE_KEYWORDS, RULES};

static INTERROGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:who|what|where|when|why|how|is|are|was|were|did|does|can|should)\b")
        .expect("interrogative regex is valid")
});

static THEOLOGY_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:doctrine|biblical|scriptural|theological)\b")
        .expect("theology-terms regex is valid")
});

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "what", "who", "where", "when", "why", "how",
    "does", "do", "did", "can", "should", "would", "about", "in", "on", "at", "to", "for", "of",
];

const AMBIGUOUS_SUGGESTION: &str = "Please provide more context. Do you want: historical \
background, linguistic analysis, doctrinal interpretation, or practical application?";

/// Classify a question into category, subcategory, and confidence.
pub fn classify(query: &str) -> Classification {
    let text = query.trim();
    if text.is_empty() {
        return Classification::unknown();
    }

    // Deliberately ambiguous surface forms short-circuit before any
    // pattern scan; the orchestrator must not retrieve for these.
    if AMBIGUOUS_PATTERNS.iter().any(|p| p.is_match(text)) {
        return Classification {
            category: Category::Ambiguous,
            subcategory: None,
            confidence: Confidence::FULL,
            needs_clarification: true,
            keywords: Vec::new(),
            suggestion: Some(AMBIGUOUS_SUGGESTION.to_string()),
        };
    }

    // A recognizable reference is a lookup, full stop.
    if parse_reference(text).is_some() {
        return Classification {
            category: Category::Scripture,
            subcategory: Some("reference_lookup"),
            confidence: Confidence::FULL,
            needs_clarification: false,
            keywords: Vec::new(),
            suggestion: None,
        };
    }

    let lower = text.to_lowercase();
    let mut best = Classification {
        category: Category::General,
        subcategory: None,
        confidence: Confidence::ZERO,
        needs_clarification: false,
        keywords: Vec::new(),
        suggestion: None,
    };

    for rule in RULES {
        for pattern in rule.patterns {
            if !pattern.is_match(text) {
                continue;
            }
            if has_negative_keyword(rule.subcategory, &lower) {
                continue;
            }
            let confidence = score(text, rule.category, &lower);
            // Strictly-greater keeps the first rule found on ties.
            if confidence > best.confidence {
                best.category = rule.category;
                best.subcategory = Some(rule.subcategory);
                best.confidence = confidence;
            }
        }
    }

    best.keywords = extract_keywords(text);
    debug!(
        category = %best.category,
        subcategory = best.subcategory.unwrap_or("-"),
        confidence = %best.confidence,
        "classified question"
    );
    best
}

fn has_negative_keyword(subcategory: &str, lower: &str) -> bool {
    NEGATIVE_KEYWORDS
        .iter()
        .find(|(sub, _)| *sub == subcategory)
        .map(|(_, negatives)| negatives.iter().any(|neg| lower.contains(neg)))
        .unwrap_or(false)
}

/// Base confidence for a pattern match, boosted by surface signals.
fn score(text: &str, category: Category, lower: &str) -> Confidence {
    let mut confidence = Confidence::new(CLASSIFY_BASE_CONFIDENCE);

    if text.contains('?') {
        confidence = confidence.boosted(CLASSIFY_SIGNAL_BOOST);
    }
    if INTERROGATIVE.is_match(text) {
        confidence = confidence.boosted(CLASSIFY_SIGNAL_BOOST);
    }
    if category == Category::Theology && THEOLOGY_TERMS.is_match(lower) {
        confidence = confidence.boosted(CLASSIFY_SIGNAL_BOOST);
    }

    confidence
}

/// Unique meaningful keywords, in order of first appearance.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for word in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
    {
        if !seen.iter().any(|s| s == word) {
            seen.push(word.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_unknown_with_zero_confidence() {
        let c = classify("");
        assert_eq!(c.category, Category::Unknown);
        assert_eq!(c.confidence.value(), 0.0);
        let c = classify("   ");
        assert_eq!(c.category, Category::Unknown);
    }

    #[test]
    fn references_short_circuit() {
        let c = classify("John 3:16");
        assert!(c.is(Category::Scripture, "reference_lookup"));
        assert_eq!(c.confidence.value(), 1.0);
        assert!(!c.needs_clarification);
    }

    #[test]
    fn ambiguous_forms_request_clarification() {
        for q in ["explain this", "what does this mean", "show me", "this verse"] {
            let c = classify(q);
            assert!(c.needs_clarification, "{q:?} should need clarification");
            assert_eq!(c.category, Category::Ambiguous);
        }
    }

    #[test]
    fn biographical_question_routes_to_who() {
        let c = classify("Who is Melchizedek?");
        assert!(c.is(Category::Scripture, "who"));
        assert!(c.confidence.value() >= 0.8);
    }

    #[test]
    fn negative_keywords_suppress_doctrinal_match() {
        // "who is" plus a soteriology keyword must not land in soteriology.
        let c = classify("who is the man preaching salvation");
        assert_ne!(c.subcategory, Some("soteriology"));
    }

    #[test]
    fn keywords_are_unique_and_filtered() {
        let kw = extract_keywords("What does the Bible say about the Kingdom of God?");
        assert!(kw.contains(&"bible".to_string()));
        assert!(kw.contains(&"kingdom".to_string()));
        assert!(!kw.contains(&"the".to_string()));
        let unique: std::collections::HashSet<_> = kw.iter().collect();
        assert_eq!(unique.len(), kw.len());
    }
}
