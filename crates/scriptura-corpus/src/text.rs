//! Modern-English text providers (KJV, WEB, ASV, GENEVA, BISHOPS).
//!
//! One struct covers every file-backed English translation; the
//! translation id and source subdirectory are data, not control flow.

use std::sync::Arc;

use async_trait::async_trait;

use scriptura_core::{AssistantResult, TranslationId, Verse, VerseSource};

use crate::loader::BookLoader;

pub struct TextProvider {
    translation: TranslationId,
    subdir: String,
    loader: Arc<BookLoader>,
}

impl TextProvider {
    pub fn new(translation: TranslationId, subdir: impl Into<String>, loader: Arc<BookLoader>) -> Self {
        Self {
            translation,
            subdir: subdir.into(),
            loader,
        }
    }

    pub fn kjv(loader: Arc<BookLoader>) -> Self {
        Self::new(TranslationId::Kjv, "bible/kjv", loader)
    }

    pub fn web(loader: Arc<BookLoader>) -> Self {
        Self::new(TranslationId::Web, "bible/web", loader)
    }

    pub fn asv(loader: Arc<BookLoader>) -> Self {
        Self::new(TranslationId::Asv, "bible/asv", loader)
    }

    pub fn geneva(loader: Arc<BookLoader>) -> Self {
        Self::new(TranslationId::Geneva, "bible/geneva", loader)
    }

    pub fn bishops(loader: Arc<BookLoader>) -> Self {
        Self::new(TranslationId::Bishops, "bible/bishops", loader)
    }
}

#[async_trait]
impl VerseSource for TextProvider {
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
        let doc = self.loader.text_book(&self.subdir, book).await?;
        let Some(doc) = doc.as_ref() else {
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        match verse {
            // Whole-chapter request: every verse, ascending.
            None => {
                for (v, text) in doc.chapter(chapter) {
                    out.push(Verse::english(
                        format!("{book} {chapter}:{v}"),
                        text.to_string(),
                        self.translation,
                    ));
                }
            }
            Some(start) => {
                let end = verse_end.unwrap_or(start).max(start);
                for v in start..=end {
                    if let Some(text) = doc.verse(chapter, v) {
                        out.push(Verse::english(
                            format!("{book} {chapter}:{v}"),
                            text.to_string(),
                            self.translation,
                        ));
                    }
                }
            }
        }
        Ok(out)
    }
}
