use proptest::prelude::*;

use scriptura_classify::{classify, route, Intent};

proptest! {
    /// Confidence is always within [0, 1], whatever the input.
    #[test]
    fn confidence_is_bounded(input in ".{0,120}") {
        let c = classify(&input);
        let v = c.confidence.value();
        prop_assert!((0.0..=1.0).contains(&v), "confidence {v} out of bounds");
    }

    /// Routing is total: every input gets some intent without panicking.
    #[test]
    fn routing_is_total(input in ".{0,120}") {
        let _ = route(&input);
    }

    /// Question-mark and interrogative boosts never push a match past 1.0
    /// and never below the base.
    #[test]
    fn matched_questions_score_at_least_base(topic in "[a-z]{3,10}") {
        let c = classify(&format!("who is {topic}?"));
        prop_assert!(c.confidence.value() >= 0.7);
        prop_assert!(c.confidence.value() <= 1.0);
    }
}

#[test]
fn empty_and_whitespace_inputs_are_unknown() {
    for input in ["", " ", "\n\t"] {
        let c = classify(input);
        assert_eq!(c.confidence.value(), 0.0);
        assert_eq!(route(input).intent, Intent::Unknown);
    }
}
