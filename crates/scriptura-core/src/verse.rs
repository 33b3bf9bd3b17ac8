//! Verse and translation models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed enumeration of translation / manuscript sources. Each maps to
/// exactly one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TranslationId {
    Kjv,
    Web,
    Esv,
    Asv,
    Geneva,
    Bishops,
    Wlc,
    Lxx,
    Sinaiticus,
    #[serde(rename = "APOC")]
    Apocrypha,
}

impl TranslationId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kjv => "KJV",
            Self::Web => "WEB",
            Self::Esv => "ESV",
            Self::Asv => "ASV",
            Self::Geneva => "GENEVA",
            Self::Bishops => "BISHOPS",
            Self::Wlc => "WLC",
            Self::Lxx => "LXX",
            Self::Sinaiticus => "SINAITICUS",
            Self::Apocrypha => "APOC",
        }
    }

    /// The modern English translations a user can select as preferred.
    pub const ENGLISH: [TranslationId; 6] = [
        Self::Kjv,
        Self::Web,
        Self::Esv,
        Self::Asv,
        Self::Geneva,
        Self::Bishops,
    ];
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationId {
    type Err = UnknownTranslation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "KJV" => Ok(Self::Kjv),
            "WEB" => Ok(Self::Web),
            "ESV" => Ok(Self::Esv),
            "ASV" => Ok(Self::Asv),
            "GENEVA" => Ok(Self::Geneva),
            "BISHOPS" => Ok(Self::Bishops),
            "WLC" => Ok(Self::Wlc),
            "LXX" => Ok(Self::Lxx),
            "SINAITICUS" => Ok(Self::Sinaiticus),
            "APOC" | "APOCRYPHA" => Ok(Self::Apocrypha),
            _ => Err(UnknownTranslation(s.to_string())),
        }
    }
}

/// Error for translation identifiers outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown translation: {0}")]
pub struct UnknownTranslation(pub String);

/// Language of a verse's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "he")]
    He,
    #[serde(rename = "grc")]
    Grc,
}

/// One `[surface, lemma, morphology]` token from an ancient-language
/// manuscript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    pub surface: String,
    pub lemma: String,
    pub morphology: String,
}

/// A retrieved verse. Immutable once produced; stages downstream never
/// mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub reference: String,
    pub text: String,
    pub translation: TranslationId,
    pub language: Language,
    pub rtl: bool,
    /// Token triplets; empty for modern-English sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<WordToken>,
}

impl Verse {
    /// A plain English-text verse.
    pub fn english(reference: String, text: String, translation: TranslationId) -> Self {
        Self {
            reference,
            text,
            translation,
            language: Language::En,
            rtl: false,
            words: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_id_roundtrip() {
        for id in [
            TranslationId::Kjv,
            TranslationId::Web,
            TranslationId::Wlc,
            TranslationId::Apocrypha,
        ] {
            assert_eq!(id.as_str().parse::<TranslationId>().unwrap(), id);
        }
        assert_eq!("esv".parse::<TranslationId>().unwrap(), TranslationId::Esv);
        assert!("NIV".parse::<TranslationId>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&TranslationId::Apocrypha).unwrap();
        assert_eq!(json, "\"APOC\"");
        let json = serde_json::to_string(&Language::Grc).unwrap();
        assert_eq!(json, "\"grc\"");
    }
}
