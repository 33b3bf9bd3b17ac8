//! # scriptura-classify
//!
//! Turns free-text questions into routing decisions: a cheap quick-path
//! intent router for high-precision phrasings, a pattern-taxonomy
//! classifier for everything else, and a grammar-level question analyzer
//! that catches ill-formed input before any retrieval happens.

pub mod analyzer;
pub mod classifier;
pub mod intent;
pub mod taxonomy;

pub use analyzer::{analyze, clarification_request, ClarificationRequest, QuestionAnalysis};
pub use classifier::{classify, extract_keywords};
pub use intent::{route, Intent, Routed};
