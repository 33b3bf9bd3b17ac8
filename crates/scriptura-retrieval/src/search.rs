//! Local verse search.
//!
//! A token-overlap heuristic over a small in-memory pool (curated
//! samples plus any verse history the caller supplies). This is the
//! last-resort retrieval path when a query has no reference to chase.

use scriptura_core::constants::{SEARCH_RESULT_LIMIT, SEARCH_SCORE_THRESHOLD};
use scriptura_core::{TranslationId, Verse};

/// Knobs for one search call.
pub struct SearchOptions<'a> {
    pub limit: usize,
    pub preferred: Option<TranslationId>,
    /// Verses the caller has already shown; they score like pool entries.
    pub history: &'a [Verse],
}

impl Default for SearchOptions<'_> {
    fn default() -> Self {
        Self {
            limit: SEARCH_RESULT_LIMIT,
            preferred: None,
            history: &[],
        }
    }
}

/// Score and rank the pool against a query, best first.
pub fn search_verses(pool: &[Verse], query: &str, options: &SearchOptions<'_>) -> Vec<Verse> {
    let query_lower = query.to_lowercase();

    let mut scored: Vec<(f64, &Verse)> = options
        .history
        .iter()
        .chain(pool.iter())
        .map(|verse| {
            let haystack = format!("{} {}", verse.reference, verse.text);
            let mut score = score_match(&haystack, query);

            // Mentioning the exact reference is the strongest signal.
            if !verse.reference.is_empty()
                && query_lower.contains(&verse.reference.to_lowercase())
            {
                score += 1.5;
            }
            if options.preferred == Some(verse.translation) {
                score += 0.2;
            }
            (score, verse)
        })
        .filter(|(score, _)| *score > SEARCH_SCORE_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(options.limit)
        .map(|(_, v)| v.clone())
        .collect()
}

/// Substring / token-overlap score in [0, ~1.5].
fn score_match(text: &str, query: &str) -> f64 {
    if text.is_empty() || query.is_empty() {
        return 0.0;
    }
    let t = text.to_lowercase();
    let q = query.to_lowercase();

    if t.contains(&q) {
        return (q.len() as f64 / 100.0).min(1.0) + 0.5;
    }

    let tokens: Vec<&str> = q.split(|c: char| !c.is_alphanumeric()).filter(|s| !s.is_empty()).collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let hits = tokens.iter().filter(|tok| t.contains(**tok)).count();
    hits as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Verse> {
        vec![
            Verse::english(
                "John 3:16".into(),
                "For God so loved the world".into(),
                TranslationId::Kjv,
            ),
            Verse::english(
                "1 John 4:8".into(),
                "He that loveth not knoweth not God; for God is love.".into(),
                TranslationId::Kjv,
            ),
            Verse::english(
                "Psalm 23:1".into(),
                "The LORD is my shepherd".into(),
                TranslationId::Web,
            ),
        ]
    }

    #[test]
    fn token_overlap_finds_topical_verses() {
        let hits = search_verses(&pool(), "God is love", &SearchOptions::default());
        assert!(!hits.is_empty());
        assert_eq!(hits[0].reference, "1 John 4:8");
    }

    #[test]
    fn exact_reference_mention_ranks_first() {
        let hits = search_verses(&pool(), "show me John 3:16", &SearchOptions::default());
        assert_eq!(hits[0].reference, "John 3:16");
    }

    #[test]
    fn preferred_translation_breaks_ties() {
        let hits = search_verses(
            &pool(),
            "shepherd",
            &SearchOptions {
                preferred: Some(TranslationId::Web),
                ..SearchOptions::default()
            },
        );
        assert_eq!(hits[0].translation, TranslationId::Web);
    }

    #[test]
    fn unrelated_queries_return_nothing() {
        let hits = search_verses(&pool(), "xylophone quantum", &SearchOptions::default());
        assert!(hits.is_empty());
    }

    #[test]
    fn limit_is_respected() {
        let hits = search_verses(
            &pool(),
            "God",
            &SearchOptions {
                limit: 1,
                ..SearchOptions::default()
            },
        );
        assert_eq!(hits.len(), 1);
    }
}
