//! Question classification models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification confidence clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0.0);
    pub const FULL: Confidence = Confidence(1.0);

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Add a boost, saturating at 1.0.
    pub fn boosted(self, amount: f64) -> Self {
        Self::new(self.0 + amount)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Top-level question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Scripture,
    Theology,
    History,
    Apologetics,
    Practical,
    Pastoral,
    ComparativeReligion,
    Paul,
    Ambiguous,
    General,
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scripture => "scripture",
            Self::Theology => "theology",
            Self::History => "history",
            Self::Apologetics => "apologetics",
            Self::Practical => "practical",
            Self::Pastoral => "pastoral",
            Self::ComparativeReligion => "comparative_religion",
            Self::Paul => "paul",
            Self::Ambiguous => "ambiguous",
            Self::General => "general",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The label assigned to a free-text question.
///
/// `needs_clarification == true` means the orchestrator must not retrieve
/// anything and must return a clarification prompt instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub subcategory: Option<&'static str>,
    pub confidence: Confidence,
    pub needs_clarification: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Classification {
    /// The zero-confidence label for empty input.
    pub fn unknown() -> Self {
        Self {
            category: Category::Unknown,
            subcategory: None,
            confidence: Confidence::ZERO,
            needs_clarification: false,
            keywords: Vec::new(),
            suggestion: None,
        }
    }

    pub fn is(&self, category: Category, subcategory: &str) -> bool {
        self.category == category && self.subcategory == Some(subcategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_clamps() {
        assert_eq!(Confidence::new(1.5).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(0.7).boosted(0.5).value(), 1.0);
    }

    #[test]
    fn category_wire_names() {
        let json = serde_json::to_string(&Category::ComparativeReligion).unwrap();
        assert_eq!(json, "\"comparative_religion\"");
    }
}
