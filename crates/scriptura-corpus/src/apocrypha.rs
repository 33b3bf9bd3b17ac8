//! Apocrypha provider.
//!
//! Serves the deuterocanonical books from their own directory. The
//! stored text is the KJV apocrypha, so emitted verses carry the KJV
//! translation id even though the provider itself is the dedicated
//! apocrypha source.

use std::sync::Arc;

use async_trait::async_trait;

use scriptura_core::books::{self, APOCRYPHA_BOOKS};
use scriptura_core::{AssistantResult, TranslationId, Verse, VerseSource};

use crate::loader::BookLoader;

const SUBDIR: &str = "apocrypha";

pub struct ApocryphaProvider {
    loader: Arc<BookLoader>,
}

impl ApocryphaProvider {
    pub fn new(loader: Arc<BookLoader>) -> Self {
        Self { loader }
    }

    /// Substring search across every apocrypha book.
    pub async fn search(&self, query: &str, limit: usize) -> AssistantResult<Vec<Verse>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for book in APOCRYPHA_BOOKS {
            let doc = self.loader.text_book(SUBDIR, book).await?;
            let Some(doc) = doc.as_ref() else { continue };
            for chapter in doc.chapter_numbers() {
                for (v, text) in doc.chapter(chapter) {
                    if text.to_lowercase().contains(&needle) {
                        results.push(Verse::english(
                            format!("{book} {chapter}:{v}"),
                            text.to_string(),
                            TranslationId::Kjv,
                        ));
                        if results.len() >= limit {
                            return Ok(results);
                        }
                    }
                }
            }
        }
        Ok(results)
    }
}

#[async_trait]
impl VerseSource for ApocryphaProvider {
    fn translation(&self) -> TranslationId {
        TranslationId::Apocrypha
    }

    async fn verses(
        &self,
        book: &str,
        chapter: u16,
        verse: Option<u16>,
        verse_end: Option<u16>,
    ) -> AssistantResult<Vec<Verse>> {
        if !books::is_apocryphal(book) {
            return Ok(Vec::new());
        }

        // Letter of Jeremiah chapter 1 is stored as chapter 6 (Baruch 6
        // in the KJV tradition). The emitted reference keeps the
        // requested chapter number.
        let stored_chapter = if book == "Letter of Jeremiah" && chapter == 1 {
            6
        } else {
            chapter
        };

        let doc = self.loader.text_book(SUBDIR, book).await?;
        let Some(doc) = doc.as_ref() else {
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        match verse {
            None => {
                for (v, text) in doc.chapter(stored_chapter) {
                    out.push(Verse::english(
                        format!("{book} {chapter}:{v}"),
                        text.to_string(),
                        TranslationId::Kjv,
                    ));
                }
            }
            Some(start) => {
                let end = verse_end.unwrap_or(start).max(start);
                for v in start..=end {
                    if let Some(text) = doc.verse(stored_chapter, v) {
                        out.push(Verse::english(
                            format!("{book} {chapter}:{v}"),
                            text.to_string(),
                            TranslationId::Kjv,
                        ));
                    }
                }
            }
        }
        Ok(out)
    }
}
