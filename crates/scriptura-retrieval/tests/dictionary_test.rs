use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use scriptura_retrieval::{levenshtein, max_edit_distance, DictionaryIndex};

fn index_with_names() -> (TempDir, DictionaryIndex) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");
    fs::write(
        &path,
        r#"{
            "zipporah": { "headword": "Zipporah", "def": "Wife of Moses, daughter of Jethro the priest of Midian." },
            "zion": { "headword": "Zion", "def": "The hill of Jerusalem; by extension the city and people of God." },
            "melchizedek": { "headword": "Melchizedek", "def": "King of Salem and priest of the most high God." },
            "mephibosheth": { "headword": "Mephibosheth", "def": "Son of Jonathan, shown kindness by David." },
            "zebulun": { "headword": "Zebulun", "def": "Tenth son of Jacob; the tribe settled toward the sea." }
        }"#,
    )
    .unwrap();

    let mut index = DictionaryIndex::curated();
    index.load_external(&path, "NAMES").unwrap();
    (dir, index)
}

#[test]
fn exact_lookup_finds_external_entries() {
    let (_dir, index) = index_with_names();
    let entry = index.lookup("Zipporah").unwrap();
    assert_eq!(entry.headword, "Zipporah");
    assert_eq!(entry.source, "NAMES");
}

#[test]
fn prefix_search_matches_stems() {
    let (_dir, index) = index_with_names();
    let hits = index.search_prefix("zi", 5);
    let heads: Vec<&str> = hits.iter().map(|e| e.headword.as_str()).collect();
    assert!(heads.contains(&"Zion"));
    assert!(heads.contains(&"Zipporah"));
}

#[test]
fn fuzzy_search_rescues_misspellings() {
    let (_dir, index) = index_with_names();
    // One insertion away from "zipporah".
    let hits = index.search_fuzzy("zipphorah", 3);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].headword, "Zipporah");
}

#[test]
fn fuzzy_candidates_share_the_first_character() {
    let (_dir, index) = index_with_names();
    // "elchizedek" is one edit from "melchizedek" but starts differently.
    let hits = index.search_fuzzy("elchizedek", 5);
    assert!(hits.is_empty());
}

#[test]
fn fuzzy_results_are_ordered_by_distance() {
    let (_dir, index) = index_with_names();
    let hits = index.search_fuzzy("zebulon", 5);
    assert_eq!(hits[0].headword, "Zebulun");
}

#[test]
fn later_external_loads_win_on_collision() {
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.json");
    let general = dir.path().join("general.json");
    fs::write(
        &names,
        r#"{ "zion": { "headword": "Zion", "def": "names definition" } }"#,
    )
    .unwrap();
    fs::write(
        &general,
        r#"{ "zion": { "headword": "Zion", "def": "general definition" } }"#,
    )
    .unwrap();

    let mut index = DictionaryIndex::curated();
    index.load_external(&names, "NAMES").unwrap();
    index.load_external(&general, "GENERAL").unwrap();
    assert_eq!(index.lookup("zion").unwrap().definition, "general definition");
}

#[test]
fn missing_external_file_degrades_to_curated() {
    let mut index = DictionaryIndex::curated();
    index
        .load_external(std::path::Path::new("/nonexistent/dictionary.json"), "GENERAL")
        .unwrap();
    assert!(index.lookup("atonement").is_some());
    assert!(index.search_prefix("zi", 5).is_empty());
}

#[test]
fn malformed_external_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "not json at all").unwrap();
    let mut index = DictionaryIndex::curated();
    assert!(index.load_external(&path, "GENERAL").is_err());
}

proptest! {
    /// Fuzzy lookup never returns a candidate beyond the edit-distance
    /// bound for the query term.
    #[test]
    fn fuzzy_respects_the_distance_bound(term in "[a-z]{1,12}") {
        let (_dir, index) = index_with_names();
        let bound = max_edit_distance(term.len());
        for entry in index.search_fuzzy(&term, 10) {
            let key: String = entry
                .headword
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_lowercase())
                .collect();
            prop_assert!(
                levenshtein(&term, &key) <= bound,
                "{key} exceeds bound {bound} for {term}"
            );
        }
    }

    /// Levenshtein is symmetric and zero only on equality.
    #[test]
    fn levenshtein_is_a_metric(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }
}
