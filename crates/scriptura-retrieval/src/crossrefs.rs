//! Cross-reference index.
//!
//! An exact-reference keyed table. Lookup of an unknown reference is an
//! empty slice, never an error. A JSON overlay file can extend or
//! replace the curated entries.

use std::collections::HashMap;
use std::path::Path;

use scriptura_core::IndexError;

const CURATED: &[(&str, &[&str])] = &[
    ("John 3:16", &["Romans 5:8", "1 John 4:9-10", "John 3:17"]),
    ("Genesis 1:1", &["John 1:1-3", "Hebrews 11:3", "Psalm 33:6"]),
    ("Psalm 23:1", &["John 10:11", "Ezekiel 34:11-12"]),
    ("Romans 8:28", &["Genesis 50:20", "Jeremiah 29:11"]),
    ("Proverbs 3:5", &["Jeremiah 17:7", "Psalm 37:5"]),
    ("John 1:1", &["Genesis 1:1-3", "Colossians 1:16-17", "Hebrews 1:2-3"]),
    ("John 14:6", &["Acts 4:12", "1 Timothy 2:5"]),
    ("Romans 3:23", &["Psalm 14:3", "Ecclesiastes 7:20"]),
    ("Romans 6:23", &["John 3:36", "Ephesians 2:8-9"]),
    ("1 Corinthians 13:4", &["Galatians 5:22-23", "1 Peter 4:8"]),
    ("Ephesians 2:8", &["Romans 3:24", "Titus 3:5", "2 Timothy 1:9"]),
    ("1 John 4:8", &["1 John 4:16", "John 3:16", "Romans 5:8"]),
    ("Philippians 4:13", &["2 Corinthians 12:9", "Colossians 1:11"]),
];

pub struct CrossReferenceIndex {
    map: HashMap<String, Vec<String>>,
}

impl CrossReferenceIndex {
    /// The curated table alone.
    pub fn curated() -> Self {
        let map = CURATED
            .iter()
            .map(|(k, refs)| {
                (
                    (*k).to_string(),
                    refs.iter().map(|r| (*r).to_string()).collect(),
                )
            })
            .collect();
        Self { map }
    }

    /// Curated table extended by a JSON overlay
    /// (`{ "<reference>": ["<reference>", ...] }`). A missing file is
    /// fine; a file that exists but does not parse is an error.
    pub fn with_overlay(path: &Path) -> Result<Self, IndexError> {
        let mut index = Self::curated();
        let Ok(bytes) = std::fs::read(path) else {
            return Ok(index);
        };
        let overlay: HashMap<String, Vec<String>> =
            serde_json::from_slice(&bytes).map_err(|e| IndexError::MalformedIndex {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        index.map.extend(overlay);
        Ok(index)
    }

    /// Related passages for an exact normalized reference.
    pub fn get(&self, reference: &str) -> &[String] {
        self.map.get(reference).map(Vec::as_slice).unwrap_or(&[])
    }
}
