//! Neutral synthesis of retrieved passages into one answer.

use scriptura_core::constants::SYNTHESIS_TOP_HITS;
use scriptura_core::{Citation, Verse};

/// The synthesized answer body and its citations.
pub struct Synthesis {
    pub answer: String,
    pub citations: Vec<Citation>,
}

/// Format up to the top three hits into quoted blocks with neutral
/// reading guidance. No hits yields a rephrase hint and zero citations.
pub fn synthesize_neutral(query: &str, hits: &[Verse]) -> Synthesis {
    if hits.is_empty() {
        return Synthesis {
            answer: format!(
                "I didn't find a direct match locally for: \"{query}\". Try rephrasing or \
                 specifying a book (e.g., \"in Romans\")."
            ),
            citations: Vec::new(),
        };
    }

    let top = &hits[..hits.len().min(SYNTHESIS_TOP_HITS)];
    let verses_block = top
        .iter()
        .map(|v| format!("\u{201C}{}\u{201D}\n— {} ({})", v.text, v.reference, v.translation))
        .collect::<Vec<_>>()
        .join("\n\n");

    let answer = format!(
        "Here are passages related to your query:\n\n{verses_block}\n\n\
         How to read these neutrally:\n\
         • Consider immediate literary context (preceding and following verses).\n\
         • Compare translations to avoid relying on a single rendering.\n\
         • Check cross-references for how Scripture interprets Scripture.\n\n\
         Would you like:\n\
         • Passage context\n\
         • Compare translations\n\
         • Word study (original language term)?"
    );

    Synthesis {
        answer,
        citations: top
            .iter()
            .map(|v| Citation::new(v.reference.clone(), v.translation.to_string()))
            .collect(),
    }
}
