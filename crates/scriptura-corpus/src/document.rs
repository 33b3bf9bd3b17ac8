//! On-disk book document adapters.
//!
//! Book files historically come in more than one shape. All shape
//! handling lives here, in one adapter per document family; providers
//! only ever see the normalized forms.
//!
//! Text books (modern translations, apocrypha):
//! - `{ "book": "John", "chapters": { "3": { "16": "For God so..." } } }`
//! - `{ "3": { "16": "For God so..." } }` (bare chapter-keyed object)
//!
//! Token books (ancient manuscripts), verses as `[surface, lemma, morph]`
//! triplets:
//! - the two object shapes above, with triplet arrays as verse values
//! - `[ [ [triplet, ...], ... ], ... ]` (chapters and verses as
//!   1-indexed nested arrays)
//!
//! Anything else is malformed and fails fast at load time.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use scriptura_core::WordToken;

/// A parsed modern-text book: chapter -> verse -> text.
#[derive(Debug, Clone, Default)]
pub struct TextBook {
    chapters: HashMap<u16, BTreeMap<u16, String>>,
}

impl TextBook {
    /// Parse a book JSON document, accepting both supported shapes.
    pub fn parse(bytes: &[u8]) -> Result<Self, String> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| format!("invalid JSON: {e}"))?;
        let chapters_obj = chapters_object(&value).ok_or("no chapter map found")?;

        let mut chapters = HashMap::new();
        for (ch_key, ch_value) in chapters_obj {
            let ch: u16 = ch_key
                .parse()
                .map_err(|_| format!("non-numeric chapter key {ch_key:?}"))?;
            let verses_obj = ch_value
                .as_object()
                .ok_or_else(|| format!("chapter {ch_key} is not an object"))?;
            let mut verses = BTreeMap::new();
            for (v_key, v_value) in verses_obj {
                let v: u16 = v_key
                    .parse()
                    .map_err(|_| format!("non-numeric verse key {v_key:?} in chapter {ch_key}"))?;
                let text = v_value
                    .as_str()
                    .ok_or_else(|| format!("verse {ch_key}:{v_key} is not a string"))?;
                verses.insert(v, text.to_string());
            }
            chapters.insert(ch, verses);
        }
        Ok(Self { chapters })
    }

    pub fn verse(&self, chapter: u16, verse: u16) -> Option<&str> {
        self.chapters
            .get(&chapter)
            .and_then(|c| c.get(&verse))
            .map(String::as_str)
    }

    /// All verses of a chapter in ascending order.
    pub fn chapter(&self, chapter: u16) -> impl Iterator<Item = (u16, &str)> {
        self.chapters
            .get(&chapter)
            .into_iter()
            .flat_map(|c| c.iter().map(|(v, t)| (*v, t.as_str())))
    }

    /// Chapter numbers present in this book, ascending.
    pub fn chapter_numbers(&self) -> Vec<u16> {
        let mut out: Vec<u16> = self.chapters.keys().copied().collect();
        out.sort_unstable();
        out
    }
}

/// A parsed manuscript book: chapter -> verse -> word tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenBook {
    chapters: HashMap<u16, BTreeMap<u16, Vec<WordToken>>>,
}

impl TokenBook {
    /// Parse a manuscript JSON document, accepting the object shapes and
    /// the nested-array shape.
    pub fn parse(bytes: &[u8]) -> Result<Self, String> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| format!("invalid JSON: {e}"))?;

        if let Some(outer) = value.as_array() {
            return Self::parse_array_shape(outer);
        }

        let chapters_obj = chapters_object(&value).ok_or("no chapter map found")?;
        let mut chapters = HashMap::new();
        for (ch_key, ch_value) in chapters_obj {
            let ch: u16 = ch_key
                .parse()
                .map_err(|_| format!("non-numeric chapter key {ch_key:?}"))?;
            let verses_obj = ch_value
                .as_object()
                .ok_or_else(|| format!("chapter {ch_key} is not an object"))?;
            let mut verses = BTreeMap::new();
            for (v_key, v_value) in verses_obj {
                let v: u16 = v_key
                    .parse()
                    .map_err(|_| format!("non-numeric verse key {v_key:?} in chapter {ch_key}"))?;
                verses.insert(v, parse_tokens(v_value, ch_key, v_key)?);
            }
            chapters.insert(ch, verses);
        }
        Ok(Self { chapters })
    }

    fn parse_array_shape(outer: &[Value]) -> Result<Self, String> {
        let mut chapters = HashMap::new();
        for (ch_idx, ch_value) in outer.iter().enumerate() {
            let verses_arr = ch_value
                .as_array()
                .ok_or_else(|| format!("chapter {} is not an array", ch_idx + 1))?;
            let mut verses = BTreeMap::new();
            for (v_idx, v_value) in verses_arr.iter().enumerate() {
                let tokens =
                    parse_tokens(v_value, &(ch_idx + 1).to_string(), &(v_idx + 1).to_string())?;
                verses.insert((v_idx + 1) as u16, tokens);
            }
            chapters.insert((ch_idx + 1) as u16, verses);
        }
        Ok(Self { chapters })
    }

    pub fn verse(&self, chapter: u16, verse: u16) -> Option<&[WordToken]> {
        self.chapters
            .get(&chapter)
            .and_then(|c| c.get(&verse))
            .map(Vec::as_slice)
    }

    /// All verses of a chapter in ascending order.
    pub fn chapter(&self, chapter: u16) -> impl Iterator<Item = (u16, &[WordToken])> {
        self.chapters
            .get(&chapter)
            .into_iter()
            .flat_map(|c| c.iter().map(|(v, w)| (*v, w.as_slice())))
    }
}

/// Locate the chapter map inside a book value: either the `chapters`
/// field, or the value itself when every top-level key is numeric.
fn chapters_object(value: &Value) -> Option<&serde_json::Map<String, Value>> {
    let obj = value.as_object()?;
    if let Some(chapters) = obj.get("chapters") {
        return chapters.as_object();
    }
    if !obj.is_empty() && obj.keys().all(|k| k.chars().all(|c| c.is_ascii_digit())) {
        return Some(obj);
    }
    None
}

fn parse_tokens(value: &Value, ch: &str, vs: &str) -> Result<Vec<WordToken>, String> {
    let arr = value
        .as_array()
        .ok_or_else(|| format!("verse {ch}:{vs} is not a token array"))?;
    arr.iter()
        .map(|token| {
            let parts = token
                .as_array()
                .ok_or_else(|| format!("token in {ch}:{vs} is not an array"))?;
            let part = |i: usize| {
                parts
                    .get(i)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            Ok(WordToken {
                surface: part(0),
                lemma: part(1),
                morphology: part(2),
            })
        })
        .collect()
}
