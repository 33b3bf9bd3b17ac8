//! # scriptura-pipeline
//!
//! The query-answering pipeline. [`Assistant::answer_query`] is the one
//! public entry point the UI layer depends on: it resolves follow-ups,
//! classifies, parses references, retrieves through the fallback chains,
//! augments with the static indices, and synthesizes a single answer
//! with citations.

pub mod context;
pub mod followup;
pub mod neutrality;
pub mod orchestrator;
pub mod persona;
pub mod synthesizer;

pub use context::{QueryContext, UserStats};
pub use orchestrator::Assistant;
