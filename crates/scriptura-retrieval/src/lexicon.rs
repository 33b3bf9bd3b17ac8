//! Word-study lexicon.
//!
//! A curated table of Strong's glosses keyed by English headword, with
//! term extraction from "greek for X" / "word study on X" phrasings.

use std::sync::LazyLock;

use regex::Regex;

/// One original-language gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub strong: &'static str,
    pub lemma: &'static str,
    pub language: &'static str,
    pub gloss: &'static str,
    pub notes: &'static str,
}

const ENTRIES: &[(&str, LexiconEntry)] = &[
    (
        "love",
        LexiconEntry {
            strong: "G26",
            lemma: "agapē",
            language: "Greek",
            gloss: "self-giving love; benevolent goodwill",
            notes: "Often denotes covenantal, volitional love; cf. 1 John 4:8; John 3:16.",
        },
    ),
    (
        "faith",
        LexiconEntry {
            strong: "G4102",
            lemma: "pistis",
            language: "Greek",
            gloss: "faith, trust, fidelity",
            notes: "Relational trust in God; assurance.",
        },
    ),
    (
        "grace",
        LexiconEntry {
            strong: "G5485",
            lemma: "charis",
            language: "Greek",
            gloss: "grace, favor, gift",
            notes: "God's unmerited favor; Ephesians 2:8.",
        },
    ),
    (
        "peace",
        LexiconEntry {
            strong: "G1515",
            lemma: "eirēnē",
            language: "Greek",
            gloss: "peace, wholeness",
            notes: "Harmony with God; cf. John 14:27.",
        },
    ),
    (
        "righteousness",
        LexiconEntry {
            strong: "G1343",
            lemma: "dikaiosynē",
            language: "Greek",
            gloss: "righteousness, justice",
            notes: "Right standing/justice; Romans themes.",
        },
    ),
    (
        "sin",
        LexiconEntry {
            strong: "G266",
            lemma: "hamartia",
            language: "Greek",
            gloss: "sin, missing the mark",
            notes: "Failure to meet God's standard.",
        },
    ),
    (
        "spirit",
        LexiconEntry {
            strong: "G4151",
            lemma: "pneuma",
            language: "Greek",
            gloss: "spirit, wind, breath",
            notes: "Used of the Holy Spirit and human spirit.",
        },
    ),
    (
        "truth",
        LexiconEntry {
            strong: "G225",
            lemma: "alētheia",
            language: "Greek",
            gloss: "truth, reality",
            notes: "Faithfulness/verity; John 14:6.",
        },
    ),
    (
        "word",
        LexiconEntry {
            strong: "G3056",
            lemma: "logos",
            language: "Greek",
            gloss: "word, message, account",
            notes: "Divine Word in John 1:1.",
        },
    ),
    (
        "lovingkindness",
        LexiconEntry {
            strong: "H2617",
            lemma: "ḥesed",
            language: "Hebrew",
            gloss: "steadfast love, loyal kindness",
            notes: "Covenant loyalty; Psalm 136.",
        },
    ),
];

static TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:word study on|greek for|hebrew for|original (?:word|language) for)\s+([a-z\-']+)")
        .expect("lexicon term regex is valid")
});

#[derive(Default)]
pub struct LexiconIndex;

impl LexiconIndex {
    pub fn new() -> Self {
        Self
    }

    /// Look up the word-study entry for a query, extracting the term
    /// from study phrasing first and falling back to the whole query.
    pub fn word_study(&self, query: &str) -> Option<&'static LexiconEntry> {
        let lower = query.to_lowercase();
        let key = match TERM_RE.captures(&lower) {
            Some(caps) => caps[1].to_string(),
            None => lower.chars().filter(|c| c.is_ascii_alphabetic()).collect(),
        };
        ENTRIES
            .iter()
            .find(|(head, _)| *head == key)
            .map(|(_, entry)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_term_from_study_phrasing() {
        let lex = LexiconIndex::new();
        let entry = lex.word_study("greek for love").unwrap();
        assert_eq!(entry.strong, "G26");
        let entry = lex.word_study("word study on grace").unwrap();
        assert_eq!(entry.lemma, "charis");
    }

    #[test]
    fn bare_term_still_resolves() {
        let lex = LexiconIndex::new();
        assert!(lex.word_study("faith").is_some());
    }

    #[test]
    fn hebrew_entries_are_tagged() {
        let lex = LexiconIndex::new();
        let entry = lex.word_study("hebrew for lovingkindness").unwrap();
        assert_eq!(entry.language, "Hebrew");
    }

    #[test]
    fn unknown_terms_yield_none() {
        let lex = LexiconIndex::new();
        assert!(lex.word_study("greek for xylophone").is_none());
    }
}
