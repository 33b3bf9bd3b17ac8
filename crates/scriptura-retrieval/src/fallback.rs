//! Deterministic provider fallback.
//!
//! The chain per preferred translation is a fixed table consulted by one
//! generic try-in-order routine: each link runs only when the previous
//! returned zero verses, and only one provider's results are ever
//! returned. Apocryphal books go to the apocrypha provider first,
//! independent of preference.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use scriptura_core::books;
use scriptura_core::{Reference, TranslationId, Verse, VerseSource};

use crate::cache::{VerseCache, VerseCacheKey};

use scriptura_core::TranslationId::{Asv, Bishops, Esv, Geneva, Kjv, Web};

/// The ordered provider list for a preferred translation.
pub fn chain_for(preferred: Option<TranslationId>) -> &'static [TranslationId] {
    match preferred {
        Some(Web) => &[Web, Kjv, Esv, Asv],
        Some(Esv) => &[Esv, Web, Kjv, Asv],
        Some(Asv) => &[Asv, Web, Kjv, Esv],
        Some(Bishops) => &[Bishops, Web, Kjv, Esv],
        Some(Geneva) => &[Geneva, Web, Kjv, Esv],
        // Default and anything without its own chain.
        _ => &[Kjv, Web, Esv, Asv],
    }
}

/// Tries providers in chain order, stopping at the first non-empty
/// result, with the verse cache in front.
pub struct FallbackFetcher {
    providers: HashMap<TranslationId, Arc<dyn VerseSource>>,
    apocrypha: Option<Arc<dyn VerseSource>>,
    cache: Arc<VerseCache>,
}

impl FallbackFetcher {
    pub fn new(cache: Arc<VerseCache>) -> Self {
        Self {
            providers: HashMap::new(),
            apocrypha: None,
            cache,
        }
    }

    /// Register a provider under its own translation id.
    pub fn with_provider(mut self, provider: Arc<dyn VerseSource>) -> Self {
        self.providers.insert(provider.translation(), provider);
        self
    }

    /// Register the dedicated apocrypha provider.
    pub fn with_apocrypha(mut self, provider: Arc<dyn VerseSource>) -> Self {
        self.apocrypha = Some(provider);
        self
    }

    /// A provider registered for one translation, if any.
    pub fn provider(&self, translation: TranslationId) -> Option<&Arc<dyn VerseSource>> {
        self.providers.get(&translation)
    }

    /// Fetch a reference through the preferred translation's chain.
    ///
    /// Provider errors are logged and treated as a miss for that link so
    /// the chain proceeds; exhausting the chain yields an empty vec.
    pub async fn fetch_preferred(
        &self,
        reference: &Reference,
        preferred: Option<TranslationId>,
    ) -> Vec<Verse> {
        let key = VerseCacheKey {
            translation: preferred.unwrap_or(Kjv),
            book: reference.book.clone(),
            chapter: reference.chapter,
            verse: reference.verse,
            verse_end: reference.verse_end,
        };
        if let Some(hit) = self.cache.get(&key) {
            debug!(reference = %reference, "verse cache hit");
            return hit.as_ref().clone();
        }

        // Apocrypha quick path, independent of preferred translation.
        if books::is_apocryphal(&reference.book) && reference.verse.is_some() {
            if let Some(apocrypha) = &self.apocrypha {
                match self.try_source(apocrypha.as_ref(), reference).await {
                    Some(verses) => {
                        self.cache.put(key, verses.clone());
                        return verses;
                    }
                    None => debug!(reference = %reference, "apocrypha provider had no text"),
                }
            }
        }

        for translation in chain_for(preferred) {
            let Some(provider) = self.providers.get(translation) else {
                continue;
            };
            if let Some(verses) = self.try_source(provider.as_ref(), reference).await {
                debug!(reference = %reference, translation = %translation, "chain link served");
                self.cache.put(key, verses.clone());
                return verses;
            }
        }

        debug!(reference = %reference, "fallback chain exhausted");
        Vec::new()
    }

    async fn try_source(&self, source: &dyn VerseSource, reference: &Reference) -> Option<Vec<Verse>> {
        match source
            .verses(
                &reference.book,
                reference.chapter,
                reference.verse,
                reference.verse_end,
            )
            .await
        {
            Ok(verses) if !verses.is_empty() => Some(verses),
            Ok(_) => None,
            Err(e) => {
                warn!(
                    translation = %source.translation(),
                    reference = %reference,
                    error = %e,
                    "provider failed; treating as miss"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_match_the_fixed_table() {
        assert_eq!(chain_for(Some(Web)), &[Web, Kjv, Esv, Asv]);
        assert_eq!(chain_for(Some(Esv)), &[Esv, Web, Kjv, Asv]);
        assert_eq!(chain_for(Some(Asv)), &[Asv, Web, Kjv, Esv]);
        assert_eq!(chain_for(Some(Bishops)), &[Bishops, Web, Kjv, Esv]);
        assert_eq!(chain_for(Some(Geneva)), &[Geneva, Web, Kjv, Esv]);
        assert_eq!(chain_for(None), &[Kjv, Web, Esv, Asv]);
        assert_eq!(chain_for(Some(TranslationId::Wlc)), &[Kjv, Web, Esv, Asv]);
    }

    #[test]
    fn every_chain_starts_with_its_preference() {
        for preferred in TranslationId::ENGLISH {
            let chain = chain_for(Some(preferred));
            if preferred == Kjv {
                // KJV uses the default chain, which already leads with it.
                assert_eq!(chain[0], Kjv);
            } else {
                assert_eq!(chain[0], preferred);
            }
        }
    }
}
