//! Scripture reference parsing and normalization.
//!
//! Turns free text like "jn 3:16-18" or "1 Corinthians 13" into a
//! normalized [`Reference`]. Parsing never fails loudly: unrecognized
//! input yields `None` and callers fall through to classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::books;

/// Captures an optional leading numeral, a multi-word book token, a
/// chapter number, and an optional `:verse[-verseEnd]` suffix.
static REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d?\s?[A-Za-z][A-Za-z\s'()\-]+?)\s+(\d{1,3})(?::(\d{1,3})(?:[-–](\d{1,3}))?)?\b")
        .expect("reference regex is valid")
});

/// A structured pointer to a book/chapter/verse range.
///
/// `verse == None` denotes a whole-chapter request. When both ends of a
/// range are present, `verse_end >= verse` holds; a reversed range is
/// collapsed to the single starting verse at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub book: String,
    pub chapter: u16,
    pub verse: Option<u16>,
    pub verse_end: Option<u16>,
}

impl Reference {
    /// Canonical display form: `"John 3:16"`, `"John 3:16-18"`, `"John 3"`.
    pub fn normalized(&self) -> String {
        match (self.verse, self.verse_end) {
            (Some(v), Some(e)) => format!("{} {}:{}-{}", self.book, self.chapter, v, e),
            (Some(v), None) => format!("{} {}:{}", self.book, self.chapter, v),
            _ => format!("{} {}", self.book, self.chapter),
        }
    }

    /// The inclusive verse range requested, when a verse is present.
    pub fn verse_range(&self) -> Option<(u16, u16)> {
        let start = self.verse?;
        Some((start, self.verse_end.unwrap_or(start)))
    }

    /// Whether this reference denotes a whole chapter.
    pub fn whole_chapter(&self) -> bool {
        self.verse.is_none()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}

/// Parse the first scripture reference out of free text.
pub fn parse_reference(raw: &str) -> Option<Reference> {
    let caps = REF_RE.captures(raw)?;
    let book_token = caps[1].replace('.', "");
    let book_token = book_token.trim();
    let chapter: u16 = caps[2].parse().ok()?;
    let verse: Option<u16> = caps.get(3).and_then(|m| m.as_str().parse().ok());
    let verse_end: Option<u16> = caps.get(4).and_then(|m| m.as_str().parse().ok());

    let book = books::resolve_book(book_token);

    // Collapse reversed ranges rather than carrying an invalid end.
    let verse_end = match (verse, verse_end) {
        (Some(v), Some(e)) if e >= v => Some(e),
        _ => None,
    };

    Some(Reference {
        book,
        chapter,
        verse,
        verse_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_reference() {
        let r = parse_reference("John 3:16").unwrap();
        assert_eq!(r.book, "John");
        assert_eq!(r.chapter, 3);
        assert_eq!(r.verse, Some(16));
        assert_eq!(r.verse_end, None);
        assert_eq!(r.normalized(), "John 3:16");
    }

    #[test]
    fn parses_range_and_abbreviation() {
        let r = parse_reference("show me jn 3:16-18 please").unwrap();
        assert_eq!(r.book, "John");
        assert_eq!(r.verse_range(), Some((16, 18)));
        assert_eq!(r.normalized(), "John 3:16-18");
    }

    #[test]
    fn chapter_only_is_valid() {
        let r = parse_reference("1 Corinthians 13").unwrap();
        assert_eq!(r.book, "1 Corinthians");
        assert!(r.whole_chapter());
        assert_eq!(r.normalized(), "1 Corinthians 13");
    }

    #[test]
    fn reversed_range_collapses() {
        let r = parse_reference("John 3:18-16").unwrap();
        assert_eq!(r.verse, Some(18));
        assert_eq!(r.verse_end, None);
    }

    #[test]
    fn non_reference_text_is_rejected() {
        assert!(parse_reference("what is grace").is_none());
        assert!(parse_reference("").is_none());
    }

    #[test]
    fn apocrypha_reference_parses() {
        let r = parse_reference("Tobit 1:1").unwrap();
        assert_eq!(r.book, "Tobit");
        assert_eq!(r.normalized(), "Tobit 1:1");
    }
}
