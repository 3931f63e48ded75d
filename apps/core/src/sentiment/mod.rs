//! # Sentiment Module
//!
//! Lexicon-based sentiment scoring.
//!
//! ## Components
//! - `tokenizer`: lowercase word extraction and n-gram expansion
//! - `filter`: exclusion filters compiled from word lists, patterns or closures
//! - `lexicon`: default-valued word score and influencer tables
//! - `neutrality`: raw-text patterns that force a zero score
//! - `classifier`: threshold classification
//! - `report`: traced output of `SentimentScorer::analyze`
//! - `scorer`: main orchestrator

pub mod classifier;
pub mod filter;
pub mod lexicon;
pub mod neutrality;
pub mod report;
pub mod scorer;
pub mod tokenizer;

pub use classifier::{classify, Sentiment};
pub use filter::{ExcludePredicate, ExclusionFilter, ExclusionSpec};
pub use lexicon::ScoreTable;
pub use neutrality::NeutralityGuard;
pub use report::{Contribution, ContributionKind, SentimentReport};
pub use scorer::{ScorerOptions, Scoring, SentimentScorer};
pub use tokenizer::tokenize;
