//! The orchestrator: one entry point sequencing follow-up resolution,
//! clarification, classification, routing, retrieval, augmentation, and
//! synthesis.

use std::sync::{Arc, Mutex};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use scriptura_classify::{analyzer, classifier, intent, Intent};
use scriptura_core::books;
use scriptura_core::constants::SYNTHESIS_TOP_HITS;
use scriptura_core::{
    parse_reference, Answer, AnswerKind, AnswerMetadata, AssistantConfig, AssistantResult,
    Category, Citation, Classification, Reference, TranslationId, Verse, VerseSource, VerseWords,
};
use scriptura_corpus::{
    samples, ApocryphaProvider, BookLoader, ManuscriptProvider, RemoteEsvProvider, TextProvider,
};
use scriptura_retrieval::{
    search_verses, CrossReferenceIndex, DictionaryEntry, DictionaryIndex, FallbackFetcher,
    FeastIndex, LexiconIndex, LocationIndex, ReligionIndex, SearchOptions, VerseCache,
};

use crate::context::QueryContext;
use crate::followup;
use crate::neutrality::apply_neutrality;
use crate::persona::{self, PersonaState};
use crate::synthesizer::synthesize_neutral;

static TELL_ME_MORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^tell me more about\s+(.+)").expect("tell-me-more regex is valid")
});

static WANTS_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:full|complete|detailed|everything|all about|tell me more|entire|whole)\b")
        .expect("wants-full regex is valid")
});

static MENTIONS_MASORETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:masoretic|wlc|hebrew\s+(?:text|mt)|original\s+hebrew)\b")
        .expect("masoretic regex is valid")
});

static MENTIONS_LXX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:lxx|septuagint|old\s+greek|rahlfs)\b").expect("lxx regex is valid")
});

static MENTIONS_SINAITICUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:sinaiticus|codex\s+sinaiticus|aleph|01)\b")
        .expect("sinaiticus regex is valid")
});

static WHO_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^who\s+(?:is|was|were|are)\s+(?:the\s+|a\s+|an\s+)?")
        .expect("who-lead regex is valid")
});

static WHAT_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^what\s+(?:is|was|are|were)\s+(?:the\s+|a\s+|an\s+)?")
        .expect("what-lead regex is valid")
});

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence regex is valid"));

/// How long a definition can get before it is summarized.
const SUMMARY_THRESHOLD: usize = 300;

/// The query-answering assistant. Owns its caches, providers, indices,
/// and persona state; one instance serves many queries.
pub struct Assistant {
    loader: Arc<BookLoader>,
    cache: Arc<VerseCache>,
    fetcher: FallbackFetcher,
    wlc: ManuscriptProvider,
    lxx: ManuscriptProvider,
    sinaiticus: ManuscriptProvider,
    apocrypha: Arc<ApocryphaProvider>,
    crossrefs: CrossReferenceIndex,
    lexicon: LexiconIndex,
    dictionary: DictionaryIndex,
    locations: LocationIndex,
    religions: ReligionIndex,
    feasts: FeastIndex,
    sample_pool: Vec<Verse>,
    persona: Mutex<PersonaState>,
}

impl Assistant {
    pub fn new(config: AssistantConfig) -> AssistantResult<Self> {
        let loader = Arc::new(BookLoader::new(&config.corpus));
        let cache = Arc::new(VerseCache::new(config.cache.verse_ttl()));
        let apocrypha = Arc::new(ApocryphaProvider::new(loader.clone()));

        let fetcher = FallbackFetcher::new(cache.clone())
            .with_provider(Arc::new(TextProvider::kjv(loader.clone())))
            .with_provider(Arc::new(TextProvider::web(loader.clone())))
            .with_provider(Arc::new(TextProvider::asv(loader.clone())))
            .with_provider(Arc::new(TextProvider::geneva(loader.clone())))
            .with_provider(Arc::new(TextProvider::bishops(loader.clone())))
            .with_provider(Arc::new(RemoteEsvProvider::new(
                &config.remote,
                config.corpus.fetch_timeout(),
            )))
            .with_apocrypha(apocrypha.clone());

        let data = &config.corpus.data_dir;
        let crossrefs = CrossReferenceIndex::with_overlay(&data.join("crossrefs.json"))?;
        let locations = LocationIndex::with_overlay(&data.join("locations.json"))?;

        let mut dictionary = DictionaryIndex::curated();
        dictionary.load_external(&data.join("dictionaries/smiths.json"), "SMITHS")?;
        dictionary.load_external(&data.join("dictionaries/webster1913.json"), "WEBSTER")?;

        Ok(Self {
            wlc: ManuscriptProvider::wlc(loader.clone()),
            lxx: ManuscriptProvider::lxx(loader.clone()),
            sinaiticus: ManuscriptProvider::sinaiticus(loader.clone()),
            loader,
            cache,
            fetcher,
            apocrypha,
            crossrefs,
            lexicon: LexiconIndex::new(),
            dictionary,
            locations,
            religions: ReligionIndex::new(),
            feasts: FeastIndex::new(),
            sample_pool: samples::sample_pool(),
            persona: Mutex::new(PersonaState::new()),
        })
    }

    /// The shared book loader (exposes the I/O counter).
    pub fn loader(&self) -> &Arc<BookLoader> {
        &self.loader
    }

    /// The verse-range cache.
    pub fn cache(&self) -> &Arc<VerseCache> {
        &self.cache
    }

    /// Answer one free-text query. Never panics and never returns an
    /// error for missing data; errors are reserved for corrupt files.
    pub async fn answer_query(
        &self,
        message: &str,
        context: &QueryContext,
    ) -> AssistantResult<Answer> {
        info!(message, "answering query");

        // Follow-up resolution runs first so that a bare pronoun is
        // expanded before the well-formedness check sees it.
        let resolved = followup::resolve(message, &context.conversation_history);
        let text = resolved.text.clone();

        if let Some(request) = analyzer::clarification_request(&text) {
            debug!("question analysis requested clarification");
            let mut metadata = AnswerMetadata::of_kind(AnswerKind::Clarification);
            metadata.needs_clarification = true;
            metadata.suggestion = Some(request.suggestion);
            return Ok(Answer {
                answer: request.message,
                citations: Vec::new(),
                metadata,
            });
        }

        // Explicit "tell me more about X" goes straight to the full
        // dictionary entry.
        if let Some(caps) = TELL_ME_MORE.captures(&text) {
            let term = caps[1].trim();
            if let Some(answer) = self.full_definition(term) {
                return Ok(answer);
            }
        }

        if persona::detect_ambiguous(&text) {
            return Ok(persona::clarification_prompt());
        }

        let classification = classifier::classify(&text);
        if classification.needs_clarification {
            return Ok(persona::clarification_prompt());
        }

        let routed = intent::route(&text);
        let parsed = parse_reference(&text);
        debug!(intent = ?routed.intent, reference = ?parsed.as_ref().map(|r| r.normalized()), "routed");

        if self.feasts.is_feast_query(&text) {
            if let Some(body) = self.feasts.answer(&text) {
                let answer = self.persona.lock().unwrap().mentor(body);
                let mut metadata = AnswerMetadata::of_kind(AnswerKind::FeastDay);
                metadata.classification = Some((&classification).into());
                return Ok(Answer {
                    answer,
                    citations: Vec::new(),
                    metadata,
                });
            }
        }

        if routed.intent == Intent::MapLocation || resolved.inherits(AnswerKind::MapLocation) {
            if let Some(answer) = self.map_location(&text) {
                return Ok(answer);
            }
        }

        if routed.intent == Intent::WordStudy {
            if let Some(answer) = self.word_study(&text) {
                return Ok(answer);
            }
        }

        if routed.intent == Intent::Religion {
            if let Some(answer) = self.religion_overview(&text) {
                return Ok(answer);
            }
        }

        if routed.intent == Intent::UserStats {
            return Ok(self.user_stats(context));
        }

        if routed.intent == Intent::CompareTranslations {
            if let Some(reference) = parsed.as_ref().filter(|r| r.verse.is_some()) {
                if let Some(answer) = self.compare_translations(reference).await {
                    return Ok(answer);
                }
            }
        }

        if routed.intent == Intent::PassageContext {
            if let Some(reference) = parsed.as_ref() {
                return Ok(self.passage_context(reference, context).await);
            }
        }

        // Explicit manuscript requests, with verse ranges and tokens.
        if let Some(reference) = parsed.as_ref().filter(|r| r.verse.is_some()) {
            if MENTIONS_MASORETIC.is_match(&text) {
                if let Some(answer) = self
                    .manuscript_answer(&self.wlc, "WLC Masoretic", reference)
                    .await
                {
                    return Ok(answer);
                }
            }
            if MENTIONS_LXX.is_match(&text) {
                if let Some(answer) = self
                    .manuscript_answer(&self.lxx, "LXX Septuagint", reference)
                    .await
                {
                    return Ok(answer);
                }
            }
            if MENTIONS_SINAITICUS.is_match(&text) {
                return Ok(self.sinaiticus_answer(reference, context).await);
            }
        }

        // Direct reference lookup through the fallback chain. A
        // chapter-only reference fetches the whole chapter.
        if routed.intent == Intent::Reference {
            if let Some(reference) = parsed.as_ref() {
                let verses = self
                    .fetcher
                    .fetch_preferred(reference, context.selected_translation)
                    .await;
                if !verses.is_empty() {
                    return Ok(self.reference_answer(reference, verses));
                }
            }
        }

        if classification.is(Category::Scripture, "who") {
            if let Some(answer) = self.person_lookup(&text, &classification, context) {
                return Ok(answer);
            }
        }

        if classification.is(Category::Scripture, "what_definition") {
            if let Some(answer) = self.definition_lookup(&text, &classification, context) {
                return Ok(answer);
            }
        }

        // Retrieval + synthesis fallback.
        Ok(self.search_and_synthesize(&routed.query, &classification, routed.intent, parsed.as_ref(), context))
    }

    // ── Branch handlers ───────────────────────────────────────────────

    fn full_definition(&self, term: &str) -> Option<Answer> {
        let entry = self
            .dictionary
            .lookup(term)
            .or_else(|| self.dictionary.search_prefix(term, 1).into_iter().next())
            .or_else(|| self.dictionary.search_fuzzy(term, 1).into_iter().next())?;

        let mut metadata = AnswerMetadata::of_kind(AnswerKind::DefinitionLookup);
        metadata.headword = Some(entry.headword.clone());
        Some(Answer {
            answer: format!("📖 {}\n\n{}", entry.headword, entry.definition),
            citations: Vec::new(),
            metadata,
        })
    }

    fn map_location(&self, query: &str) -> Option<Answer> {
        let location = self.locations.search(query, 1).into_iter().next()?.clone();

        let mut body = format!("📍 **{}**", location.name);
        if let Some(country) = &location.modern_country {
            body.push_str(&format!("\n\n**Present Day Location:** {country}"));
        }
        if let Some(region) = &location.region {
            body.push_str(&format!("\n**Biblical Region:** {region}"));
        }
        if let Some(coords) = &location.coordinates {
            body.push_str(&format!(
                "\n**Coordinates:** {}°N, {}°E",
                coords.lat, coords.lng
            ));
        }
        if let Some(description) = &location.description {
            body.push_str(&format!("\n\n{description}"));
        }
        if !location.events.is_empty() {
            body.push_str("\n\n**Biblical Significance:**");
            for event in &location.events {
                body.push_str(&format!("\n• {event}"));
            }
        }
        if !location.primary_scriptures.is_empty() {
            body.push_str(&format!(
                "\n\n**Key Passages:** {}",
                location.primary_scriptures.join(", ")
            ));
        }

        let answer = self.persona.lock().unwrap().mentor(body);
        let mut metadata = AnswerMetadata::of_kind(AnswerKind::MapLocation);
        metadata.location = Some(location.name.clone());
        Some(Answer {
            answer,
            citations: Vec::new(),
            metadata,
        })
    }

    fn word_study(&self, query: &str) -> Option<Answer> {
        let entry = self.lexicon.word_study(query)?;
        let body = format!(
            "Word Study: {} ({}) — Strong's {}\nMeaning: {}\nNotes: {}\n\n\
             Hint: Ask for passages that use this term to see usage in context.",
            entry.lemma, entry.language, entry.strong, entry.gloss, entry.notes
        );
        let mut metadata = AnswerMetadata::of_kind(AnswerKind::WordStudy);
        metadata.headword = Some(entry.lemma.to_string());
        Some(Answer {
            answer: apply_neutrality(body),
            citations: Vec::new(),
            metadata,
        })
    }

    fn religion_overview(&self, query: &str) -> Option<Answer> {
        let (body, religion) = self.religions.apologetic_overview(query)?;
        let mut metadata = AnswerMetadata::of_kind(AnswerKind::Religion);
        metadata.headword = Some(religion.name.to_string());
        Some(Answer {
            answer: apply_neutrality(body),
            citations: Vec::new(),
            metadata,
        })
    }

    fn user_stats(&self, context: &QueryContext) -> Answer {
        let metadata = AnswerMetadata::of_kind(AnswerKind::UserStats);
        match &context.user_stats {
            Some(stats) => Answer {
                answer: format!(
                    "Here are your current stats:\n\n\
                     **Current Streak:** {} days\n\
                     **Total XP:** {}\n\
                     **Total Quizzes Taken:** {}\n\
                     **Overall Accuracy:** {:.0}%\n\n\
                     Keep up the great work!",
                    stats.current_streak, stats.total_xp, stats.total_quizzes, stats.accuracy
                ),
                citations: Vec::new(),
                metadata,
            },
            None => Answer {
                answer: "Could not retrieve user statistics.".to_string(),
                citations: Vec::new(),
                metadata,
            },
        }
    }

    async fn compare_translations(&self, reference: &Reference) -> Option<Answer> {
        let normalized = reference.normalized();
        let single = Reference {
            verse_end: None,
            ..reference.clone()
        };

        // Ancient manuscripts first (Old Testament only).
        let mut sources: Vec<(&str, Verse)> = Vec::new();
        if books::is_old_testament(&reference.book) {
            if let Some(v) = self.first_verse(&self.wlc, &single).await {
                sources.push(("WLC - Hebrew Masoretic", v));
            }
            if let Some(v) = self.first_verse(&self.lxx, &single).await {
                sources.push(("LXX - Greek Septuagint", v));
            }
        }

        if books::is_apocryphal(&reference.book) {
            if let Some(v) = self.first_verse(self.apocrypha.as_ref(), &single).await {
                sources.push(("APOC", v));
            }
        }

        for (label, translation) in [
            ("KJV", TranslationId::Kjv),
            ("WEB", TranslationId::Web),
            ("ESV", TranslationId::Esv),
            ("ASV", TranslationId::Asv),
            ("BISHOPS", TranslationId::Bishops),
            ("GENEVA", TranslationId::Geneva),
        ] {
            if let Some(provider) = self.fetcher.provider(translation) {
                if let Some(v) = self.first_verse(provider.as_ref(), &single).await {
                    sources.push((label, v));
                }
            }
        }

        if sources.is_empty() {
            return None;
        }

        let mut body = format!("Compare translations for {normalized}:");
        for (label, verse) in &sources {
            body.push_str(&format!("\n\n[{label}] {}", verse.text));
        }
        body.push_str(&format!(
            "\n\nTip: Ask \"cross refs for {normalized}\" or \"word study on <term>\"."
        ));

        let translations = sources
            .iter()
            .map(|(label, _)| label.split(' ').next().unwrap_or(*label))
            .collect::<Vec<_>>()
            .join("/");

        let mut metadata = AnswerMetadata::of_kind(AnswerKind::CompareTranslations);
        metadata.apocrypha = sources.iter().any(|(label, _)| *label == "APOC");
        Some(Answer {
            answer: apply_neutrality(body),
            citations: vec![Citation::new(normalized, translations)],
            metadata,
        })
    }

    async fn passage_context(&self, reference: &Reference, context: &QueryContext) -> Answer {
        let key = reference.normalized();
        let primary = if reference.verse.is_some() {
            self.fetcher
                .fetch_preferred(reference, context.selected_translation)
                .await
                .into_iter()
                .next()
        } else {
            None
        };

        let mut body = format!("Passage context for {key} (concise):");
        if let Some(verse) = &primary {
            body.push_str(&format!("\n\n\u{201C}{}\u{201D} — {key}", verse.text));
        }
        body.push_str(
            "\n\nFor full literary context, read the surrounding paragraph in your preferred \
             translation and consider cross-references.",
        );
        let related = self.crossrefs.get(&key);
        if !related.is_empty() {
            body.push_str(&format!("\nRelated passages: {}.", related.join(", ")));
        }

        let translation = primary
            .as_ref()
            .map(|v| v.translation.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        Answer {
            answer: apply_neutrality(body),
            citations: vec![Citation::new(key, translation)],
            metadata: AnswerMetadata::of_kind(AnswerKind::PassageContext),
        }
    }

    async fn manuscript_answer(
        &self,
        provider: &ManuscriptProvider,
        header: &str,
        reference: &Reference,
    ) -> Option<Answer> {
        let verses = self.manuscript_range(provider, reference).await;
        if verses.is_empty() {
            return None;
        }
        Some(self.format_manuscript(header, None, &verses, reference))
    }

    async fn sinaiticus_answer(&self, reference: &Reference, context: &QueryContext) -> Answer {
        let verses = self.manuscript_range(&self.sinaiticus, reference).await;
        if !verses.is_empty() {
            return self.format_manuscript("Codex Sinaiticus", None, &verses, reference);
        }

        // Not extant at the requested verse; show the Septuagint, then
        // the preferred chain.
        let lxx = self.manuscript_range(&self.lxx, reference).await;
        if !lxx.is_empty() {
            return self.format_manuscript(
                "LXX",
                Some(
                    "Note: requested verse is not extant in Codex Sinaiticus; showing \
                     Septuagint (LXX).",
                ),
                &lxx,
                reference,
            );
        }

        let preferred = self
            .fetcher
            .fetch_preferred(reference, context.selected_translation)
            .await;
        if !preferred.is_empty() {
            let mut body = format!(
                "Note: requested verse is not extant in Codex Sinaiticus; showing {}.",
                preferred[0].translation
            );
            body.push_str(&format!("\n\n{}", format_verses_block(&preferred)));
            let related = self.crossrefs.get(&reference.normalized());
            if !related.is_empty() {
                body.push_str(&format!("\n\nRelated passages: {}.", related.join(", ")));
            }
            let citations = preferred
                .iter()
                .map(|v| Citation::new(v.reference.clone(), v.translation.to_string()))
                .collect();
            return Answer {
                answer: apply_neutrality(body),
                citations,
                metadata: AnswerMetadata::of_kind(AnswerKind::Manuscript),
            };
        }

        Answer {
            answer: apply_neutrality(format!(
                "The requested verse is not extant in Codex Sinaiticus, and no other source \
                 has {} available.",
                reference.normalized()
            )),
            citations: Vec::new(),
            metadata: AnswerMetadata::of_kind(AnswerKind::Manuscript),
        }
    }

    async fn manuscript_range(
        &self,
        provider: &ManuscriptProvider,
        reference: &Reference,
    ) -> Vec<Verse> {
        provider
            .verses(
                &reference.book,
                reference.chapter,
                reference.verse,
                reference.verse_end,
            )
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "manuscript fetch failed");
                Vec::new()
            })
    }

    fn format_manuscript(
        &self,
        header: &str,
        note: Option<&str>,
        verses: &[Verse],
        reference: &Reference,
    ) -> Answer {
        let translation = verses[0].translation;
        let body = verses
            .iter()
            .map(|v| format!("\u{201C}{}\u{201D}\n- {} ({})", v.text, v.reference, translation))
            .collect::<Vec<_>>()
            .join("\n\n");
        let mut answer = match note {
            Some(note) => format!("{note}\n\n{body}"),
            None => format!("[{header}]\n{body}"),
        };
        let related = self.crossrefs.get(&reference.normalized());
        if !related.is_empty() {
            answer.push_str(&format!("\n\nRelated passages: {}.", related.join(", ")));
        }

        let mut metadata = AnswerMetadata::of_kind(AnswerKind::Manuscript);
        metadata.manuscript_words = verses
            .iter()
            .map(|v| VerseWords {
                reference: v.reference.clone(),
                words: v.words.clone(),
            })
            .collect();
        let citations = verses
            .iter()
            .map(|v| Citation::new(v.reference.clone(), translation.to_string()))
            .collect();
        Answer {
            answer: apply_neutrality(answer),
            citations,
            metadata,
        }
    }

    async fn first_verse(&self, source: &dyn VerseSource, reference: &Reference) -> Option<Verse> {
        source
            .verses(
                &reference.book,
                reference.chapter,
                reference.verse,
                reference.verse_end,
            )
            .await
            .ok()?
            .into_iter()
            .next()
    }

    fn reference_answer(&self, reference: &Reference, verses: Vec<Verse>) -> Answer {
        let mut body = format_verses_block(&verses);
        let related = self.crossrefs.get(&reference.normalized());
        if !related.is_empty() {
            body.push_str(&format!("\n\nRelated passages: {}.", related.join(", ")));
        }

        let citations = verses
            .iter()
            .map(|v| Citation::new(v.reference.clone(), v.translation.to_string()))
            .collect();
        let mut metadata = AnswerMetadata::of_kind(AnswerKind::Reference);
        metadata.apocrypha = books::is_apocryphal(&reference.book);
        Answer {
            answer: apply_neutrality(body),
            citations,
            metadata,
        }
    }

    fn person_lookup(
        &self,
        text: &str,
        classification: &Classification,
        context: &QueryContext,
    ) -> Option<Answer> {
        let name = WHO_LEAD.replace(text, "").replace('?', "");
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        match self.lookup_with_rescue(name) {
            LookupOutcome::Found(entry) => Some(self.lookup_answer(
                entry,
                name,
                text,
                classification,
                context,
                AnswerKind::PersonLookup,
                "📜 Key passages mentioning",
            )),
            LookupOutcome::DidYouMean(suggestions) => {
                Some(self.did_you_mean(name, suggestions, classification))
            }
            LookupOutcome::Nothing => self.person_verse_fallback(name, classification, context),
        }
    }

    fn definition_lookup(
        &self,
        text: &str,
        classification: &Classification,
        context: &QueryContext,
    ) -> Option<Answer> {
        let term = WHAT_LEAD.replace(text, "").replace('?', "");
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        match self.lookup_with_rescue(term) {
            LookupOutcome::Found(entry) => Some(self.lookup_answer(
                entry,
                term,
                text,
                classification,
                context,
                AnswerKind::DefinitionLookup,
                "📜 Biblical usage:",
            )),
            LookupOutcome::DidYouMean(suggestions) => {
                Some(self.did_you_mean(term, suggestions, classification))
            }
            LookupOutcome::Nothing => None,
        }
    }

    /// Exact lookup, then prefix, then fuzzy as suggestions only.
    fn lookup_with_rescue(&self, term: &str) -> LookupOutcome<'_> {
        if let Some(entry) = self.dictionary.lookup(term) {
            return LookupOutcome::Found(entry);
        }
        if term.len() > 3 {
            if let Some(entry) = self.dictionary.search_prefix(term, 1).into_iter().next() {
                return LookupOutcome::Found(entry);
            }
            let fuzzy = self.dictionary.search_fuzzy(term, 3);
            if !fuzzy.is_empty() {
                return LookupOutcome::DidYouMean(
                    fuzzy.iter().map(|e| e.headword.clone()).collect(),
                );
            }
        }
        LookupOutcome::Nothing
    }

    fn did_you_mean(
        &self,
        term: &str,
        suggestions: Vec<String>,
        classification: &Classification,
    ) -> Answer {
        let hint = format!(
            "I couldn't find \"{term}\", but did you mean: {}?",
            suggestions.join(", ")
        );
        let metadata = AnswerMetadata {
            suggestions: suggestions.into_iter().take(3).collect(),
            classification: Some(classification.into()),
            ..AnswerMetadata::default()
        };
        Answer {
            answer: apply_neutrality(hint),
            citations: Vec::new(),
            metadata,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn lookup_answer(
        &self,
        entry: &DictionaryEntry,
        term: &str,
        query: &str,
        classification: &Classification,
        context: &QueryContext,
        kind: AnswerKind,
        passages_label: &str,
    ) -> Answer {
        let headword = entry.headword.clone();
        let definition = clean_duplicate_headword(&entry.definition, &headword);

        let use_summary = !WANTS_FULL.is_match(query);
        let display = if use_summary {
            summarize_definition(&definition)
        } else {
            definition.clone()
        };

        let mut body = format!("📖 {headword}");
        if kind == AnswerKind::DefinitionLookup {
            if let Some(pos) = &entry.part_of_speech {
                body.push_str(&format!(" ({pos})"));
            }
        }
        body.push_str(&format!("\n\n{display}"));

        if use_summary && definition.len() > SUMMARY_THRESHOLD {
            body.push_str(&format!(
                "\n\n💡 Want more details? Ask \"Tell me more about {headword}\" for the \
                 complete entry."
            ));
        }

        // Related verses only when they actually contain the term.
        let hits = search_verses(
            &self.sample_pool,
            term,
            &SearchOptions {
                limit: 3,
                preferred: context.selected_translation,
                history: &context.verse_history,
            },
        );
        let term_lower = term.to_lowercase();
        let relevant: Vec<&Verse> = hits
            .iter()
            .filter(|v| v.text.to_lowercase().contains(&term_lower))
            .take(SYNTHESIS_TOP_HITS)
            .collect();

        if !relevant.is_empty() {
            body.push_str(&format!("\n\n{passages_label} {term}:\n"));
            for v in &relevant {
                let snippet: String = v.text.chars().take(100).collect();
                let ellipsis = if v.text.chars().count() > 100 { "..." } else { "" };
                body.push_str(&format!(
                    "\n• \"{snippet}{ellipsis}\"\n  — {} ({})",
                    v.reference, v.translation
                ));
            }
        }

        let mut answer = self
            .persona
            .lock()
            .unwrap()
            .enhance(body, classification, query);
        if kind == AnswerKind::PersonLookup {
            answer = persona::add_paul_context(answer, query);
        }

        let citations = relevant
            .iter()
            .map(|v| Citation::new(v.reference.clone(), v.translation.to_string()))
            .collect();
        let mut metadata = AnswerMetadata::of_kind(kind);
        metadata.headword = Some(headword);
        metadata.classification = Some(classification.into());
        // Factual lookups skip the neutrality footer on purpose.
        Answer {
            answer,
            citations,
            metadata,
        }
    }

    fn person_verse_fallback(
        &self,
        name: &str,
        classification: &Classification,
        context: &QueryContext,
    ) -> Option<Answer> {
        let hits = search_verses(
            &self.sample_pool,
            name,
            &SearchOptions {
                limit: 5,
                preferred: context.selected_translation,
                history: &context.verse_history,
            },
        );
        if hits.is_empty() {
            return None;
        }

        let mut body = format!("📖 About {name}:\n\nI found these passages mentioning {name}:\n\n");
        body.push_str(&format_verses_block(&hits));
        body.push_str(&format!(
            "\n\nTip: Ask \"show context for {}\" for more details.",
            hits[0].reference
        ));

        let citations = hits
            .iter()
            .map(|v| Citation::new(v.reference.clone(), v.translation.to_string()))
            .collect();
        let metadata = AnswerMetadata {
            classification: Some(classification.into()),
            ..AnswerMetadata::default()
        };
        Some(Answer {
            answer: body,
            citations,
            metadata,
        })
    }

    fn search_and_synthesize(
        &self,
        query: &str,
        classification: &Classification,
        routed_intent: Intent,
        parsed: Option<&Reference>,
        context: &QueryContext,
    ) -> Answer {
        let query = match parsed {
            Some(r) => r.normalized(),
            None => query.to_string(),
        };

        let hits = search_verses(
            &self.sample_pool,
            &query,
            &SearchOptions {
                preferred: context.selected_translation,
                history: &context.verse_history,
                ..SearchOptions::default()
            },
        );
        let synthesis = synthesize_neutral(&query, &hits);
        let mut answer = synthesis.answer;

        if routed_intent == Intent::Theology {
            answer = self.elevate_register(answer, &query);
        }

        let primary_ref = hits
            .first()
            .map(|v| v.reference.clone())
            .or_else(|| parsed.map(|r| r.normalized()));
        if let Some(primary) = primary_ref {
            let related = self.crossrefs.get(&primary);
            if !related.is_empty() {
                answer.push_str(&format!("\n\nRelated passages: {}.", related.join(", ")));
            }
        }

        let mut metadata = AnswerMetadata::of_kind(AnswerKind::General);
        metadata.classification = Some(classification.into());
        Answer {
            answer: apply_neutrality(answer),
            citations: synthesis.citations,
            metadata,
        }
    }

    /// Lift theological prompts into a more formal register and append
    /// one advanced-term definition when available.
    fn elevate_register(&self, mut answer: String, query: &str) -> String {
        if answer.contains("How to read these neutrally:") {
            answer = answer.replace("How to read these neutrally:", "Hermeneutical advisories:");
        } else {
            answer.push_str("\n\nHermeneutical advisories:");
        }
        answer.push_str("\n• Situate the pericope within its literary horizon.");
        answer.push_str("\n• Compare renderings across traditions (translation families).");
        answer.push_str("\n• Correlate with canonical cross-references (Scripture interpreting Scripture).");

        let terms = query
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| w.len() > 6)
            .take(3);
        for term in terms {
            if let Some(entry) = self.dictionary.lookup(term) {
                let pos = entry
                    .part_of_speech
                    .as_ref()
                    .map(|p| format!(" ({p})"))
                    .unwrap_or_default();
                answer.push_str(&format!(
                    "\n\nTerminology — {}{}: {}",
                    entry.headword, pos, entry.definition
                ));
                break;
            }
        }
        answer
    }
}

enum LookupOutcome<'a> {
    Found(&'a DictionaryEntry),
    DidYouMean(Vec<String>),
    Nothing,
}

fn format_verses_block(verses: &[Verse]) -> String {
    verses
        .iter()
        .map(|v| format!("\"{}\"\n— {} ({})", v.text, v.reference, v.translation))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Strip a doubled headword from the front of imported definitions.
fn clean_duplicate_headword(definition: &str, headword: &str) -> String {
    let pattern = format!(
        r"(?i)^{}\s+{}\s*[-—]?\s*",
        regex::escape(headword),
        regex::escape(headword)
    );
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace(definition, format!("{headword} — "))
            .into_owned(),
        Err(_) => definition.to_string(),
    }
}

/// First one or two sentences of a long definition, with trailing
/// incomplete markers removed.
fn summarize_definition(definition: &str) -> String {
    if definition.len() < SUMMARY_THRESHOLD {
        return definition.to_string();
    }

    let sentences: Vec<&str> = SENTENCE
        .find_iter(definition)
        .map(|m| m.as_str())
        .collect();
    if sentences.is_empty() {
        let cut: String = definition.chars().take(200).collect();
        return format!("{cut}...");
    }

    let mut summary = sentences[0].to_string();
    if sentences.len() > 1 && summary.len() < 150 {
        summary.push(' ');
        summary.push_str(sentences[1]);
    }

    // Orphaned list markers and bracketed tags at the cut point.
    let summary = summary.trim();
    let summary = Regex::new(r"\s+\(\d+\.\)\s*$")
        .map(|re| re.replace(summary, "").into_owned())
        .unwrap_or_else(|_| summary.to_string());
    let summary = Regex::new(r"\s+\[\w+\]\s*$")
        .map(|re| re.replace(&summary, "").into_owned())
        .unwrap_or_else(|_| summary.clone());
    summary.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_headword_is_collapsed() {
        let cleaned = clean_duplicate_headword("Moses Moses - the lawgiver of Israel", "Moses");
        assert_eq!(cleaned, "Moses — the lawgiver of Israel");
        let untouched = clean_duplicate_headword("the lawgiver of Israel", "Moses");
        assert_eq!(untouched, "the lawgiver of Israel");
    }

    #[test]
    fn short_definitions_are_not_summarized() {
        assert_eq!(summarize_definition("Short."), "Short.");
    }

    #[test]
    fn long_definitions_keep_leading_sentences() {
        let long = format!(
            "First sentence about the subject. Second sentence with more detail. {}",
            "Filler sentence to push the length over the threshold. ".repeat(8)
        );
        let summary = summarize_definition(&long);
        assert!(summary.starts_with("First sentence"));
        assert!(summary.len() < long.len());
    }
}
