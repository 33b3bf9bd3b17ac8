//! # scriptura-corpus
//!
//! The data-source layer: lazily loaded per-book JSON documents behind a
//! process-lifetime cache, with one provider per translation or
//! manuscript source. Every provider implements [`VerseSource`] and
//! reports absent data as an empty result so the retrieval fallback
//! chain can proceed.
//!
//! [`VerseSource`]: scriptura_core::VerseSource

pub mod apocrypha;
pub mod document;
pub mod loader;
pub mod manuscript;
pub mod remote;
pub mod samples;
pub mod text;

pub use apocrypha::ApocryphaProvider;
pub use document::{TextBook, TokenBook};
pub use loader::BookLoader;
pub use manuscript::{ManuscriptProvider, Script};
pub use remote::RemoteEsvProvider;
pub use text::TextProvider;
