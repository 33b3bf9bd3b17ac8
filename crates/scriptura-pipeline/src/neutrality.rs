//! Neutral framing guard.

const MARKER: &str = "Neutrality note";

const FOOTER: &str = "\n\nNeutrality note: Interpretations can vary across Christian \
traditions.\nI can present mainstream perspectives without endorsing any single doctrine.";

/// Append the neutrality disclaimer exactly once. Idempotent: answers
/// that already carry the marker are returned unchanged.
pub fn apply_neutrality(answer: String) -> String {
    if answer.contains(MARKER) {
        return answer;
    }
    format!("{answer}{FOOTER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_footer_once() {
        let once = apply_neutrality("some answer".to_string());
        assert!(once.contains("Neutrality note"));
        let twice = apply_neutrality(once.clone());
        assert_eq!(once, twice);
    }
}
