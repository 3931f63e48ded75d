//! Lexicon-based sentiment scoring.
//!
//! ```
//! use sentimental_core::SentimentScorer;
//!
//! let mut scorer = SentimentScorer::new();
//! scorer.merge_word_scores([("good", 1.0)]);
//! scorer.merge_influencers([("very", 2.0)]);
//!
//! assert_eq!(scorer.score("very good"), 2.0);
//! assert!(scorer.is_positive("good"));
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod sentiment;

pub use config::SentimentConfig;
pub use error::{Result, SentimentError};
pub use sentiment::{
    classify, ExclusionSpec, ScoreTable, ScorerOptions, Sentiment, SentimentReport,
    SentimentScorer,
};

#[cfg(test)]
mod tests;
