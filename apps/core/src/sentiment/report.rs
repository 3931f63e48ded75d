//! Sentiment Report - Output structure for `SentimentScorer::analyze`.
//!
//! Carries the score and classification together with the per-phrase trace
//! that produced them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::Sentiment;

/// How a phrase took part in the fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    /// Multiplied the pending influencer, added nothing
    Influencer,
    /// Added its lexicon weight times the pending influencer
    Scored,
}

/// One folded phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// The phrase as looked up (lowercase, space-joined)
    pub phrase: String,
    pub kind: ContributionKind,
    /// Influencer multiplier or lexicon score, depending on `kind`
    pub weight: f64,
    /// Influencer multiplier in effect after this phrase (influencer) or
    /// applied to it (scored)
    pub multiplier: f64,
    /// Change to the running score
    pub delta: f64,
}

/// Complete result of analyzing one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Original input text
    pub text: String,

    /// Accumulated score
    pub score: f64,

    /// Classification of `score`
    pub sentiment: Sentiment,

    /// Dead-zone used for the classification
    pub threshold: f64,

    /// Whether a neutrality pattern short-circuited scoring
    pub neutral_override: bool,

    /// Phrases left after exclusion filtering
    pub phrase_count: usize,

    /// Per-phrase trace, in fold order
    pub contributions: Vec<Contribution>,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl SentimentReport {
    /// Create an empty neutral report for `text`
    pub fn new(text: String, threshold: f64) -> Self {
        Self {
            text,
            score: 0.0,
            sentiment: Sentiment::Neutral,
            threshold,
            neutral_override: false,
            phrase_count: 0,
            contributions: vec![],
            processing_time_us: 0,
            timestamp: Utc::now(),
        }
    }

    /// Contributions that moved the score
    pub fn scored_terms(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.kind == ContributionKind::Scored && c.delta != 0.0)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Sentiment: {} ({:+.3}), Phrases: {}, Scored: {}, Neutral override: {}",
            self.sentiment,
            self.score,
            self.phrase_count,
            self.scored_terms().count(),
            if self.neutral_override { "yes" } else { "no" }
        )
    }
}
