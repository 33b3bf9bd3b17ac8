//! Ancient-manuscript providers: WLC (Hebrew Masoretic), LXX (Greek
//! Septuagint), Codex Sinaiticus (Greek).
//!
//! Manuscript verses carry their word triplets alongside rendered text.
//! Rendering is script-specific: Hebrew strips cantillation/niqqud and is
//! marked right-to-left; Greek is normalized to composed form (NFC).

use std::sync::Arc;

use async_trait::async_trait;
use unicode_normalization::UnicodeNormalization;

use scriptura_core::books;
use scriptura_core::{AssistantResult, Language, TranslationId, Verse, VerseSource, WordToken};

use crate::loader::BookLoader;

/// Script-specific rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hebrew,
    Greek,
}

/// Which books a manuscript covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coverage {
    OldTestament,
    WholeBible,
}

pub struct ManuscriptProvider {
    translation: TranslationId,
    subdir: String,
    script: Script,
    coverage: Coverage,
    loader: Arc<BookLoader>,
}

impl ManuscriptProvider {
    pub fn wlc(loader: Arc<BookLoader>) -> Self {
        Self {
            translation: TranslationId::Wlc,
            subdir: "wlc".to_string(),
            script: Script::Hebrew,
            coverage: Coverage::OldTestament,
            loader,
        }
    }

    pub fn lxx(loader: Arc<BookLoader>) -> Self {
        Self {
            translation: TranslationId::Lxx,
            subdir: "lxx".to_string(),
            script: Script::Greek,
            coverage: Coverage::OldTestament,
            loader,
        }
    }

    pub fn sinaiticus(loader: Arc<BookLoader>) -> Self {
        Self {
            translation: TranslationId::Sinaiticus,
            subdir: "sinaiticus".to_string(),
            script: Script::Greek,
            coverage: Coverage::WholeBible,
            loader,
        }
    }

    fn covers(&self, book: &str) -> bool {
        match self.coverage {
            Coverage::OldTestament => books::is_old_testament(book),
            Coverage::WholeBible => books::is_canonical(book),
        }
    }

    fn render(&self, words: &[WordToken]) -> String {
        let joined = words
            .iter()
            .map(|w| w.surface.as_str())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match self.script {
            Script::Hebrew => {
                let stripped = strip_hebrew_marks(&joined);
                // RLM marks keep the run right-to-left inside LTR output.
                format!("\u{200F}{stripped}\u{200F}")
            }
            Script::Greek => joined.nfc().collect(),
        }
    }

    fn language(&self) -> Language {
        match self.script {
            Script::Hebrew => Language::He,
            Script::Greek => Language::Grc,
        }
    }

    fn to_verse(&self, book: &str, chapter: u16, verse: u16, words: &[WordToken]) -> Verse {
        Verse {
            reference: format!("{book} {chapter}:{verse}"),
            text: self.render(words),
            translation: self.translation,
            language: self.language(),
            rtl: self.script == Script::Hebrew,
            words: words.to_vec(),
        }
    }
}

#[async_trait]
impl VerseSource for ManuscriptProvider {
    fn translation(&self) -> TranslationId {
        self.translation
    }

    async fn verses(
        &self,
        book: &str,
        chapter: u16,
        verse: Option<u16>,
        verse_end: Option<u16>,
    ) -> AssistantResult<Vec<Verse>> {
        if !self.covers(book) {
            return Ok(Vec::new());
        }
        let doc = self.loader.token_book(&self.subdir, book).await?;
        let Some(doc) = doc.as_ref() else {
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        match verse {
            None => {
                for (v, words) in doc.chapter(chapter) {
                    out.push(self.to_verse(book, chapter, v, words));
                }
            }
            Some(start) => {
                let end = verse_end.unwrap_or(start).max(start);
                for v in start..=end {
                    if let Some(words) = doc.verse(chapter, v) {
                        out.push(self.to_verse(book, chapter, v, words));
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Strip Hebrew cantillation and niqqud (U+0591..=U+05C7) so mixed
/// LTR/RTL rendering stays legible.
pub fn strip_hebrew_marks(s: &str) -> String {
    s.chars()
        .filter(|c| !('\u{0591}'..='\u{05C7}').contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_niqqud_and_cantillation() {
        // "בְּרֵאשִׁית" with points -> bare consonants.
        let pointed = "\u{05D1}\u{05B0}\u{05BC}\u{05E8}\u{05B5}\u{05D0}\u{05E9}\u{05C1}\u{05B4}\u{05D9}\u{05EA}";
        let bare = strip_hebrew_marks(pointed);
        assert_eq!(bare, "\u{05D1}\u{05E8}\u{05D0}\u{05E9}\u{05D9}\u{05EA}");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(strip_hebrew_marks("shalom"), "shalom");
    }
}
