use std::fs;

use tempfile::TempDir;

use scriptura_core::{
    AnswerKind, AnswerMetadata, AssistantConfig, Citation, ConversationTurn, TranslationId,
};
use scriptura_pipeline::{Assistant, QueryContext, UserStats};

fn write(dir: &TempDir, rel: &str, contents: &str) {
    let path = dir.path().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A corpus with KJV and WEB John, Tobit apocrypha, WLC Genesis, and a
/// names dictionary.
fn fixture_corpus() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "bible/kjv/John.json",
        r#"{ "chapters": { "3": {
            "16": "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
            "17": "For God sent not his Son into the world to condemn the world; but that the world through him might be saved."
        } } }"#,
    );
    write(
        &dir,
        "bible/web/John.json",
        r#"{ "chapters": { "3": {
            "16": "For God so loved the world, that he gave his one and only Son, that whoever believes in him should not perish, but have eternal life."
        } } }"#,
    );
    write(
        &dir,
        "apocrypha/Tobit.json",
        r#"{ "chapters": { "1": { "1": "The book of the words of Tobit, son of Tobiel." } } }"#,
    );
    write(
        &dir,
        "wlc/Genesis.json",
        r#"{ "chapters": { "1": { "1": [
            ["בְּרֵאשִׁית", "re'shith", "HNcfsa"],
            ["בָּרָא", "bara", "HVqp3ms"],
            ["אֱלֹהִים", "elohim", "HNcmpa"]
        ] } } }"#,
    );
    write(
        &dir,
        "dictionaries/smiths.json",
        r#"{
            "zipporah": { "headword": "Zipporah", "def": "Wife of Moses, daughter of Jethro the priest of Midian, mother of Gershom and Eliezer." }
        }"#,
    );
    dir
}

fn assistant_for(dir: &TempDir) -> Assistant {
    Assistant::new(AssistantConfig::with_data_dir(dir.path())).unwrap()
}

#[tokio::test]
async fn direct_reference_defaults_to_kjv() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("John 3:16", &QueryContext::default())
        .await
        .unwrap();

    assert!(answer.answer.contains("For God so loved the world"));
    assert!(answer.answer.contains("only begotten Son"), "expected the KJV rendering");
    assert_eq!(
        answer.citations,
        vec![Citation::new("John 3:16", "KJV")]
    );
    assert_eq!(answer.metadata.kind, Some(AnswerKind::Reference));
    assert!(!answer.metadata.apocrypha);
}

#[tokio::test]
async fn missing_preferred_translation_falls_back_in_chain_order() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    // ESV has no local corpus and no remote token: the ESV chain falls
    // through to WEB.
    let context = QueryContext::with_translation(TranslationId::Esv);
    let answer = assistant.answer_query("John 3:16", &context).await.unwrap();

    assert!(answer.answer.contains("one and only Son"), "expected the WEB rendering");
    assert_eq!(answer.citations[0].translation, "WEB");
}

#[tokio::test]
async fn follow_up_pronoun_keeps_the_map_subject() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    // First turn: a geography question.
    let first = assistant
        .answer_query("where is Jericho", &QueryContext::default())
        .await
        .unwrap();
    assert_eq!(first.metadata.kind, Some(AnswerKind::MapLocation));
    assert_eq!(first.metadata.location.as_deref(), Some("Jericho"));

    // Second turn: a bare pronoun resolved against the first answer.
    let context = QueryContext {
        conversation_history: vec![ConversationTurn::assistant(
            first.answer.clone(),
            first.citations.clone(),
            first.metadata.clone(),
        )],
        ..QueryContext::default()
    };
    let second = assistant.answer_query("it", &context).await.unwrap();

    assert_eq!(second.metadata.kind, Some(AnswerKind::MapLocation));
    assert_eq!(second.metadata.location.as_deref(), Some("Jericho"));
    assert!(second.answer.contains("Jericho"));
}

#[tokio::test]
async fn ambiguous_question_short_circuits_without_retrieval() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("explain this", &QueryContext::default())
        .await
        .unwrap();

    assert!(answer.metadata.needs_clarification);
    assert!(answer.citations.is_empty());
    // At least four direction options are offered.
    assert!(answer.answer.matches('•').count() >= 4);
    // No provider was touched.
    assert_eq!(assistant.loader().file_reads(), 0);
}

#[tokio::test]
async fn apocryphal_reference_is_served_by_the_apocrypha_provider() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("Tobit 1:1", &QueryContext::default())
        .await
        .unwrap();

    assert!(answer.answer.contains("book of the words of Tobit"));
    assert_eq!(answer.citations[0].translation, "KJV");
    assert!(answer.metadata.apocrypha);
}

#[tokio::test]
async fn repeated_reference_query_hits_the_cache() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);
    let context = QueryContext::default();

    let first = assistant.answer_query("John 3:16", &context).await.unwrap();
    let reads_after_first = assistant.loader().file_reads();

    let second = assistant.answer_query("John 3:16", &context).await.unwrap();
    assert_eq!(first.citations, second.citations);
    // The second call performed no provider I/O.
    assert_eq!(assistant.loader().file_reads(), reads_after_first);
}

#[tokio::test]
async fn verse_ranges_come_back_in_order() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("John 3:16-17", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.citations.len(), 2);
    assert_eq!(answer.citations[0].reference, "John 3:16");
    assert_eq!(answer.citations[1].reference, "John 3:17");
}

#[tokio::test]
async fn person_lookup_uses_the_names_dictionary() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("Who is Zipporah?", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::PersonLookup));
    assert_eq!(answer.metadata.headword.as_deref(), Some("Zipporah"));
    assert!(answer.answer.contains("Wife of Moses"));
    // Factual biographical answers carry no neutrality footer.
    assert!(!answer.answer.contains("Neutrality note"));
}

#[tokio::test]
async fn misspelled_person_gets_did_you_mean_not_substitution() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("Who is Zipphorah?", &QueryContext::default())
        .await
        .unwrap();

    assert!(answer.answer.contains("did you mean"));
    assert!(answer
        .metadata
        .suggestions
        .contains(&"Zipporah".to_string()));
    assert!(answer.citations.is_empty());
}

#[tokio::test]
async fn curated_definition_lookup_answers_directly() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("What is the Trinity?", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::DefinitionLookup));
    assert_eq!(answer.metadata.headword.as_deref(), Some("Trinity"));
    assert!(answer.answer.contains("three hypostases"));
}

#[tokio::test]
async fn word_study_resolves_the_lexicon_entry() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("greek for love", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::WordStudy));
    assert!(answer.answer.contains("agapē"));
    assert!(answer.answer.contains("Strong's G26"));
}

#[tokio::test]
async fn masoretic_request_returns_hebrew_with_tokens() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("show Genesis 1:1 in the masoretic text", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::Manuscript));
    assert_eq!(answer.citations[0].translation, "WLC");
    let words = &answer.metadata.manuscript_words;
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].words.len(), 3);
    assert_eq!(words[0].words[1].lemma, "bara");
}

#[tokio::test]
async fn comparison_lists_every_available_source() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("compare translations John 3:16", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::CompareTranslations));
    assert!(answer.answer.contains("[KJV]"));
    assert!(answer.answer.contains("[WEB]"));
    assert_eq!(answer.citations[0].translation, "KJV/WEB");
}

#[tokio::test]
async fn feast_queries_answer_from_the_feast_table() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("tell me about passover", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::FeastDay));
    assert!(answer.answer.contains("Passover"));
    assert!(answer.answer.contains("pilgrimage festivals"));
}

#[tokio::test]
async fn user_stats_come_from_the_caller() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let context = QueryContext {
        user_stats: Some(UserStats {
            current_streak: 7,
            total_xp: 1234,
            total_quizzes: 20,
            accuracy: 85.0,
        }),
        ..QueryContext::default()
    };
    let answer = assistant.answer_query("how am i doing", &context).await.unwrap();
    assert_eq!(answer.metadata.kind, Some(AnswerKind::UserStats));
    assert!(answer.answer.contains("**Current Streak:** 7 days"));
    assert!(answer.answer.contains("85%"));

    let without = assistant
        .answer_query("how am i doing", &QueryContext::default())
        .await
        .unwrap();
    assert!(without.answer.contains("Could not retrieve"));
}

#[tokio::test]
async fn theology_fallback_elevates_the_register() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("interpret the doctrine of predestination", &QueryContext::default())
        .await
        .unwrap();

    assert!(answer.answer.contains("Hermeneutical advisories:"));
    assert!(answer.answer.contains("Neutrality note"));
    // The footer appears exactly once.
    assert_eq!(answer.answer.matches("Neutrality note").count(), 1);
}

#[tokio::test]
async fn ill_formed_fragment_gets_a_clarification() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant.answer_query("x", &QueryContext::default()).await.unwrap();
    assert!(answer.metadata.needs_clarification);
    assert!(answer.metadata.suggestion.is_some());
    assert!(answer.citations.is_empty());
}

#[tokio::test]
async fn tell_me_more_returns_the_full_definition() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("tell me more about kenosis", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::DefinitionLookup));
    assert_eq!(answer.metadata.headword.as_deref(), Some("kenosis"));
    assert!(answer.answer.contains("Self-emptying"));
}

#[tokio::test]
async fn follow_up_after_definition_reuses_the_headword() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let mut metadata = AnswerMetadata::of_kind(AnswerKind::DefinitionLookup);
    metadata.headword = Some("kenosis".to_string());
    let context = QueryContext {
        conversation_history: vec![ConversationTurn::assistant(
            "📖 kenosis",
            Vec::new(),
            metadata,
        )],
        ..QueryContext::default()
    };

    let answer = assistant.answer_query("tell me more", &context).await.unwrap();
    assert_eq!(answer.metadata.headword.as_deref(), Some("kenosis"));
    assert!(answer.answer.contains("Self-emptying"));
}

#[tokio::test]
async fn whole_chapter_reference_returns_every_verse() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("John 3", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.citations.len(), 2);
    assert_eq!(answer.citations[0].reference, "John 3:16");
    assert_eq!(answer.citations[1].reference, "John 3:17");
}

#[tokio::test]
async fn unmatched_topical_query_suggests_rephrasing() {
    let dir = fixture_corpus();
    let assistant = assistant_for(&dir);

    let answer = assistant
        .answer_query("what does scripture say about quantum chromodynamics", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(answer.metadata.kind, Some(AnswerKind::General));
    assert!(answer.citations.is_empty() || !answer.answer.is_empty());
}
