//! Curated in-memory verse pool.
//!
//! A small public-domain sample of well-known passages used by topic
//! search when a query has no direct reference to chase. Kept tiny on
//! purpose; the file-backed corpora are the real data.

use scriptura_core::{TranslationId, Verse};

const KJV_SAMPLES: &[(&str, &str)] = &[
    (
        "Genesis 1:1",
        "In the beginning God created the heaven and the earth.",
    ),
    ("Psalm 23:1", "The LORD is my shepherd; I shall not want."),
    (
        "Proverbs 3:5",
        "Trust in the LORD with all thine heart; and lean not unto thine own understanding.",
    ),
    (
        "John 1:1",
        "In the beginning was the Word, and the Word was with God, and the Word was God.",
    ),
    (
        "John 3:16",
        "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
    ),
    (
        "Romans 8:28",
        "And we know that all things work together for good to them that love God, to them who are the called according to his purpose.",
    ),
    (
        "Ephesians 2:8",
        "For by grace are ye saved through faith; and that not of yourselves: it is the gift of God:",
    ),
    (
        "Philippians 4:13",
        "I can do all things through Christ which strengtheneth me.",
    ),
    (
        "1 John 4:8",
        "He that loveth not knoweth not God; for God is love.",
    ),
    (
        "Matthew 28:19",
        "Go ye therefore, and teach all nations, baptizing them in the name of the Father, and of the Son, and of the Holy Ghost:",
    ),
];

const WEB_SAMPLES: &[(&str, &str)] = &[
    (
        "Genesis 1:1",
        "In the beginning, God created the heavens and the earth.",
    ),
    ("Psalm 23:1", "Yahweh is my shepherd: I shall lack nothing."),
    (
        "Proverbs 3:5",
        "Trust in Yahweh with all your heart, and don't lean on your own understanding.",
    ),
    (
        "John 1:1",
        "In the beginning was the Word, and the Word was with God, and the Word was God.",
    ),
    (
        "John 3:16",
        "For God so loved the world, that he gave his one and only Son, that whoever believes in him should not perish, but have eternal life.",
    ),
    (
        "Romans 8:28",
        "We know that all things work together for good for those who love God, to those who are called according to his purpose.",
    ),
    (
        "Ephesians 2:8",
        "For by grace you have been saved through faith, and that not of yourselves; it is the gift of God,",
    ),
    (
        "Philippians 4:13",
        "I can do all things through Christ who strengthens me.",
    ),
    (
        "1 John 4:8",
        "He who doesn't love doesn't know God, for God is love.",
    ),
    (
        "Matthew 28:19",
        "Go and make disciples of all nations, baptizing them in the name of the Father and of the Son and of the Holy Spirit,",
    ),
];

/// The combined sample pool, KJV then WEB.
pub fn sample_pool() -> Vec<Verse> {
    KJV_SAMPLES
        .iter()
        .map(|(r, t)| Verse::english((*r).to_string(), (*t).to_string(), TranslationId::Kjv))
        .chain(
            WEB_SAMPLES
                .iter()
                .map(|(r, t)| Verse::english((*r).to_string(), (*t).to_string(), TranslationId::Web)),
        )
        .collect()
}
