//! Trait seams between the pipeline and its data sources.

use async_trait::async_trait;

use crate::errors::AssistantResult;
use crate::verse::{TranslationId, Verse};

/// A module that can supply verse text for one specific translation or
/// manuscript source.
///
/// Contract: verses come back in ascending verse order; a book, chapter,
/// or verse absent from this source yields `Ok(vec![])` so the fallback
/// chain can proceed; only a file that exists but cannot be parsed is an
/// error. `verse == None` requests the whole chapter.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// The translation this source serves.
    fn translation(&self) -> TranslationId;

    /// Fetch a verse range from one chapter.
    async fn verses(
        &self,
        book: &str,
        chapter: u16,
        verse: Option<u16>,
        verse_end: Option<u16>,
    ) -> AssistantResult<Vec<Verse>>;
}
