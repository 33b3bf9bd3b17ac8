//! Term dictionary with exact, prefix, and fuzzy lookup.
//!
//! A curated table of advanced theological/philosophical terms is always
//! available; optional external JSON indexes (a general dictionary and a
//! names dictionary) are merged in when present. Lookup escalates:
//! exact normalized key, prefix-stem match, then bounded Levenshtein.
//! Fuzzy hits are surfaced as "did you mean" suggestions, never silently
//! substituted.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use scriptura_core::constants::{FUZZY_LENGTH_RATIO, FUZZY_MIN_DISTANCE};
use scriptura_core::IndexError;

/// One dictionary definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub headword: String,
    pub part_of_speech: Option<String>,
    pub definition: String,
    pub source: String,
}

const CURATED_SOURCE: &str = "CURATED";

const CURATED: &[(&str, &str, &str, &str)] = &[
    // (key, headword, part of speech, definition)
    (
        "atonement",
        "atonement",
        "n.",
        "The reconciliatory work by which estranged parties are brought into unity; in Christian theology, the redemptive act of Christ restoring communion between God and humanity.",
    ),
    (
        "justification",
        "justification",
        "n.",
        "Forensic declaration of righteousness; divine acquittal grounded not in inherent merit but in imputed righteousness.",
    ),
    (
        "sanctification",
        "sanctification",
        "n.",
        "Consecration unto holiness; the transformative work whereby a person is progressively conformed to a sacred standard.",
    ),
    (
        "trinity",
        "Trinity",
        "n.",
        "The one divine essence subsisting in three hypostases—Father, Son, and Holy Spirit—coequal, coeternal, consubstantial.",
    ),
    (
        "kenosis",
        "kenosis",
        "n.",
        "Self-emptying; the incarnational condescension whereby the Son assumes servile form without relinquishing divine nature.",
    ),
    (
        "eschatology",
        "eschatology",
        "n.",
        "Doctrine of last things; consummation of history and final destiny of creation.",
    ),
    (
        "soteriology",
        "soteriology",
        "n.",
        "Doctrine of salvation; modes and means of deliverance and restoration.",
    ),
    (
        "ecclesiology",
        "ecclesiology",
        "n.",
        "Doctrine of the Church; nature, marks, polity, and sacramental life of the ecclesia.",
    ),
    (
        "christology",
        "Christology",
        "n.",
        "Doctrine concerning the person and work of Christ; union of natures and mediatorial office.",
    ),
    (
        "pneumatology",
        "pneumatology",
        "n.",
        "Doctrine of the Spirit; procession, gifts, sanctifying agency.",
    ),
    (
        "hamartiology",
        "hamartiology",
        "n.",
        "Doctrine of sin; privation, guilt, corruption, and their effects.",
    ),
    (
        "theodicy",
        "theodicy",
        "n.",
        "Vindication of divine goodness and justice amid the presence of evil.",
    ),
    (
        "hermeneutics",
        "hermeneutics",
        "n.",
        "Art and theory of interpretation; principles governing textual meaning and application.",
    ),
    (
        "exegesis",
        "exegesis",
        "n.",
        "Critical explanation of a text; drawing meaning out from linguistic, literary, and historical data.",
    ),
    (
        "eisegesis",
        "eisegesis",
        "n.",
        "Reading meaning into a text from prior assumptions rather than drawing it out from the text itself.",
    ),
    (
        "ontology",
        "ontology",
        "n.",
        "Philosophical account of being; categories and modes of existence.",
    ),
    (
        "epistemology",
        "epistemology",
        "n.",
        "Theory of knowledge; sources, scope, and justification of belief.",
    ),
    (
        "teleology",
        "teleology",
        "n.",
        "Explanation by ends or purposes; purposive structure of reality.",
    ),
    (
        "hypostasis",
        "hypostasis",
        "n.",
        "Underlying reality or person; in Trinitarian discourse, a distinct subsistence within the one essence.",
    ),
    (
        "ousia",
        "ousia",
        "n.",
        "Essence or being; that which makes a thing what it is.",
    ),
    (
        "perichoresis",
        "perichoresis",
        "n.",
        "Mutual indwelling and interpenetration without confusion; circumincession of the divine persons.",
    ),
    (
        "homoousios",
        "homoousios",
        "adj.",
        "Of the same essence; consubstantial.",
    ),
    (
        "hypostaticunion",
        "hypostatic union",
        "n.",
        "Personal union of divine and human natures in the one person of Christ without confusion, change, division, or separation.",
    ),
];

/// Dictionary over the curated table plus any loaded external indexes.
pub struct DictionaryIndex {
    curated: HashMap<&'static str, DictionaryEntry>,
    external: HashMap<String, DictionaryEntry>,
    /// Sorted external keys, for deterministic prefix/fuzzy scans.
    external_keys: Vec<String>,
}

impl DictionaryIndex {
    /// Curated entries only.
    pub fn curated() -> Self {
        let curated = CURATED
            .iter()
            .map(|(key, headword, pos, def)| {
                (
                    *key,
                    DictionaryEntry {
                        headword: (*headword).to_string(),
                        part_of_speech: Some((*pos).to_string()),
                        definition: (*def).to_string(),
                        source: CURATED_SOURCE.to_string(),
                    },
                )
            })
            .collect();
        Self {
            curated,
            external: HashMap::new(),
            external_keys: Vec::new(),
        }
    }

    /// Merge an external JSON index. Later loads win on key collision.
    /// A missing file degrades gracefully to whatever is already loaded;
    /// a file that exists but does not parse is an error.
    pub fn load_external(&mut self, path: &Path, source: &str) -> Result<(), IndexError> {
        let Ok(bytes) = std::fs::read(path) else {
            return Ok(());
        };
        let raw: HashMap<String, Value> =
            serde_json::from_slice(&bytes).map_err(|e| IndexError::MalformedIndex {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        for (key, value) in raw {
            let key = normalize_key(&key);
            if key.is_empty() {
                continue;
            }
            let entry = entry_from_value(&key, &value, source);
            self.external.insert(key, entry);
        }

        self.external_keys = self.external.keys().cloned().collect();
        self.external_keys.sort();
        Ok(())
    }

    /// Exact lookup, then prefix-stem rescue against the external index.
    pub fn lookup(&self, term: &str) -> Option<&DictionaryEntry> {
        let key = normalize_key(term);
        if key.is_empty() {
            return None;
        }
        if let Some(entry) = self.curated.get(key.as_str()) {
            return Some(entry);
        }
        if let Some(entry) = self.external.get(&key) {
            return Some(entry);
        }
        // Stem variants: either direction of prefix containment.
        self.external_keys
            .iter()
            .find(|k| k.starts_with(&key) || key.starts_with(k.as_str()))
            .and_then(|k| self.external.get(k))
    }

    /// All prefix-stem matches, up to `limit`.
    pub fn search_prefix(&self, term: &str, limit: usize) -> Vec<&DictionaryEntry> {
        let key = normalize_key(term);
        if key.is_empty() {
            return Vec::new();
        }
        self.external_keys
            .iter()
            .filter(|k| k.starts_with(&key) || key.starts_with(k.as_str()))
            .take(limit)
            .filter_map(|k| self.external.get(k))
            .collect()
    }

    /// Bounded-edit-distance candidates sharing the first character,
    /// nearest first, up to `limit`.
    pub fn search_fuzzy(&self, term: &str, limit: usize) -> Vec<&DictionaryEntry> {
        let key = normalize_key(term);
        let Some(first) = key.chars().next() else {
            return Vec::new();
        };
        let max_dist = max_edit_distance(key.len());

        let mut scored: Vec<(usize, &String)> = self
            .external_keys
            .iter()
            .filter(|k| k.starts_with(first))
            .filter_map(|k| {
                let d = levenshtein(&key, k);
                (d <= max_dist).then_some((d, k))
            })
            .collect();
        scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .filter_map(|(_, k)| self.external.get(k))
            .collect()
    }
}

/// The fuzzy threshold: at least [`FUZZY_MIN_DISTANCE`], growing with
/// term length.
pub fn max_edit_distance(len: usize) -> usize {
    FUZZY_MIN_DISTANCE.max((len as f64 * FUZZY_LENGTH_RATIO).floor() as usize)
}

/// Two-row Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn normalize_key(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn entry_from_value(key: &str, value: &Value, source: &str) -> DictionaryEntry {
    let headword = value
        .get("headword")
        .and_then(Value::as_str)
        .unwrap_or(key)
        .to_string();
    let part_of_speech = value
        .get("pos")
        .and_then(Value::as_str)
        .map(str::to_string);
    let definition = value
        .get("def")
        .or_else(|| value.get("definition"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| value.as_str().unwrap_or_default().to_string());
    DictionaryEntry {
        headword,
        part_of_speech,
        definition,
        source: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_terms_resolve() {
        let dict = DictionaryIndex::curated();
        let entry = dict.lookup("Trinity").unwrap();
        assert_eq!(entry.headword, "Trinity");
        assert_eq!(entry.source, CURATED_SOURCE);
        // Normalization strips punctuation and case.
        assert!(dict.lookup("hypostatic union").is_some());
    }

    #[test]
    fn unknown_term_is_none() {
        let dict = DictionaryIndex::curated();
        assert!(dict.lookup("zzyzx").is_none());
        assert!(dict.lookup("").is_none());
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("zipphorah", "zipporah"), 1);
    }

    #[test]
    fn max_distance_scales_with_length() {
        assert_eq!(max_edit_distance(4), 2);
        assert_eq!(max_edit_distance(10), 3);
        assert_eq!(max_edit_distance(20), 6);
    }
}
