//! Threshold classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of a scored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Sentiment {
    /// Returns a human-readable label for the sentiment
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

/// Classify `score` against a symmetric dead-zone of `threshold`.
///
/// Scores on the boundary (`score == threshold` or `score == -threshold`)
/// stay neutral.
pub fn classify(score: f64, threshold: f64) -> Sentiment {
    if score < -threshold {
        Sentiment::Negative
    } else if score > threshold {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}
