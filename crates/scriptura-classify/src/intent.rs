//! Quick-path intent router.
//!
//! A cheaper first pass for high-precision phrasings, run before the full
//! taxonomy. Falls through to `General` when nothing matches.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("intent regex is valid"));
    };
}

pattern!(REFERENCE, r"\b\d?\s?[A-Za-z]+\s+\d{1,3}(?::\d{1,3}(?:[-–]\d{1,3})?)?\b");
pattern!(
    WORD_STUDY,
    r"(?:word study|greek for|hebrew for|original (?:word|language)|strong['’]?s)"
);
pattern!(
    CONTEXT,
    r"(?:context|show context|surrounding|nearby verses|passage context)"
);
pattern!(
    FEAST_DAY,
    r"(?:feast|holiday|passover|pentecost|tabernacles|sukkot|yom kippur|atonement|trumpets|purim|hanukkah|shabbat|sabbath|rosh chodesh|new moon|hebrew calendar|biblical calendar|appointed time|moedim)"
);
pattern!(
    RELIGION,
    r"(?:religion|world religions|apologetics|compare (?:christianity|christian faith) to|what does (?:islam|hinduism|buddhism|judaism|sikhism|bahai) teach|is (?:islam|hinduism|buddhism|sikhism|judaism) biblical)"
);
pattern!(
    COMPARE_TRANSLATIONS,
    r"(?:compare translations|compare versions|side by side)"
);
pattern!(
    CROSS_REFS,
    r"(?:cross refs?|related passages|where else|parallel passages)"
);
pattern!(
    MAP_LOCATION,
    r"(?:where is|where was|map of|located|location of|geography of|present day)"
);
pattern!(
    USER_STATS,
    r"(?:my stats|my streak|my xp|my progress|my accuracy|how am i doing|quiz stats)"
);
pattern!(
    TOPIC,
    r"(?:verses?|passages?|scripture|what does .* say|where .* talk)"
);
pattern!(
    DEFINE,
    r"^(?:what is|define|definition of|meaning of|who is|explain)\b"
);
pattern!(
    THEOLOGY,
    r"(?:meaning|interpret|explain|doctrine|theology|view|perspective)"
);

/// High-precision quick-path intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Reference,
    WordStudy,
    PassageContext,
    FeastDay,
    Religion,
    CompareTranslations,
    CrossRefs,
    MapLocation,
    UserStats,
    Topic,
    Define,
    Theology,
    General,
    Unknown,
}

/// The routed intent plus the query text to carry forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub intent: Intent,
    pub query: String,
}

/// Route a message to a quick-path intent.
pub fn route(raw: &str) -> Routed {
    let text = raw.trim();
    if text.is_empty() {
        return Routed {
            intent: Intent::Unknown,
            query: String::new(),
        };
    }

    // Phrase intents run before the bare reference pattern so that e.g.
    // "compare translations John 3:16" routes to the comparison path and
    // still carries its reference.
    let lower = text.to_lowercase();
    let intent = if WORD_STUDY.is_match(&lower) {
        Intent::WordStudy
    } else if CONTEXT.is_match(&lower) {
        Intent::PassageContext
    } else if FEAST_DAY.is_match(&lower) {
        Intent::FeastDay
    } else if RELIGION.is_match(&lower) {
        Intent::Religion
    } else if COMPARE_TRANSLATIONS.is_match(&lower) {
        Intent::CompareTranslations
    } else if CROSS_REFS.is_match(&lower) {
        Intent::CrossRefs
    } else if MAP_LOCATION.is_match(&lower) {
        Intent::MapLocation
    } else if USER_STATS.is_match(&lower) {
        Intent::UserStats
    } else if REFERENCE.is_match(text) {
        Intent::Reference
    } else if TOPIC.is_match(&lower) {
        Intent::Topic
    } else if DEFINE.is_match(&lower) {
        Intent::Define
    } else if THEOLOGY.is_match(&lower) {
        Intent::Theology
    } else {
        Intent::General
    };

    Routed {
        intent,
        query: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_references_route_as_reference() {
        assert_eq!(route("John 3:16").intent, Intent::Reference);
        assert_eq!(route("read Romans 8 with me").intent, Intent::Reference);
    }

    #[test]
    fn phrase_intents_keep_their_reference() {
        assert_eq!(
            route("compare translations John 3:16").intent,
            Intent::CompareTranslations
        );
        assert_eq!(
            route("passage context for John 3:16").intent,
            Intent::PassageContext
        );
    }

    #[test]
    fn word_study_phrasing() {
        assert_eq!(route("greek for love").intent, Intent::WordStudy);
        assert_eq!(route("word study on grace").intent, Intent::WordStudy);
        assert_eq!(route("strong's number for faith").intent, Intent::WordStudy);
    }

    #[test]
    fn quick_paths_route_before_topic() {
        assert_eq!(route("compare translations of this").intent, Intent::CompareTranslations);
        assert_eq!(route("cross refs for that").intent, Intent::CrossRefs);
        assert_eq!(route("where is Jericho").intent, Intent::MapLocation);
        assert_eq!(route("how am i doing on quizzes").intent, Intent::UserStats);
        assert_eq!(route("when is passover").intent, Intent::FeastDay);
    }

    #[test]
    fn falls_through_to_general() {
        assert_eq!(route("hello there").intent, Intent::General);
        assert_eq!(route("").intent, Intent::Unknown);
    }

    #[test]
    fn define_requires_leading_position() {
        assert_eq!(route("what is grace").intent, Intent::Define);
        // Not at the start: falls to the theology bucket via "explain".
        assert_eq!(route("please explain predestination").intent, Intent::Theology);
    }
}
