//! Sentiment Scorer - Main entry point of the scoring pipeline.
//!
//! Pipeline: neutrality guard (early exit) → tokenizer → exclusion filter →
//! influencer-aware fold → threshold classification.
//!
//! An influencer multiplies the pending multiplier and adds nothing itself;
//! the next scored phrase consumes the multiplier, which then resets to 1.0.

use regex::Regex;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::classifier::{classify, Sentiment};
use super::filter::{ExclusionFilter, ExclusionSpec};
use super::lexicon::ScoreTable;
use super::neutrality::NeutralityGuard;
use super::report::{Contribution, ContributionKind, SentimentReport};
use super::tokenizer;
use crate::error::Result;
use crate::loader;

/// Construction options for `SentimentScorer`
#[derive(Debug, Clone)]
pub struct ScorerOptions {
    /// Symmetric neutral dead-zone around zero
    pub threshold: f64,
    /// Initial lexicon
    pub word_scores: ScoreTable,
    /// Patterns that force a zero score
    pub neutral_patterns: Vec<Regex>,
    /// Largest phrase size looked up; 0 falls back to 1
    pub ngram_order: usize,
    /// Initial influencer table
    pub influencers: ScoreTable,
    /// Phrases dropped before scoring
    pub exclude: ExclusionSpec,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            word_scores: ScoreTable::new(),
            neutral_patterns: vec![],
            ngram_order: 1,
            influencers: ScoreTable::new(),
            exclude: ExclusionSpec::Nothing,
        }
    }
}

/// Running state of one fold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoring {
    pub score: f64,
    pub current_influencer: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            score: 0.0,
            current_influencer: 1.0,
        }
    }
}

/// What a single fold step did
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Influenced { multiplier: f64 },
    Scored { weight: f64, multiplier: f64 },
}

impl Scoring {
    fn step(self, phrase: &str, word_scores: &ScoreTable, influencers: &ScoreTable) -> (Self, Step) {
        let influence = influencers.get(phrase);
        if influence > 0.0 {
            let next = Self {
                current_influencer: self.current_influencer * influence,
                ..self
            };
            (next, Step::Influenced { multiplier: influence })
        } else {
            let weight = word_scores.get(phrase);
            let next = Self {
                score: self.score + weight * self.current_influencer,
                current_influencer: 1.0,
            };
            (
                next,
                Step::Scored {
                    weight,
                    multiplier: self.current_influencer,
                },
            )
        }
    }
}

/// Lexicon-based sentiment scorer
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    threshold: f64,
    word_scores: ScoreTable,
    influencers: ScoreTable,
    neutrality: NeutralityGuard,
    ngram_order: usize,
    exclude: ExclusionFilter,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Create a scorer with empty tables, threshold 0 and unigrams only
    pub fn new() -> Self {
        Self {
            threshold: 0.0,
            word_scores: ScoreTable::new(),
            influencers: ScoreTable::new(),
            neutrality: NeutralityGuard::default(),
            ngram_order: 1,
            exclude: ExclusionFilter::Never,
        }
    }

    /// Create a scorer from explicit options
    pub fn with_options(options: ScorerOptions) -> Self {
        let mut scorer = Self::new();
        scorer.threshold = options.threshold;
        scorer.word_scores = options.word_scores;
        scorer.influencers = options.influencers;
        scorer.neutrality = NeutralityGuard::new(options.neutral_patterns);
        scorer.set_ngram_order(options.ngram_order);
        scorer.set_exclude(&options.exclude);
        scorer
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn ngram_order(&self) -> usize {
        self.ngram_order
    }

    /// Change the n-gram order. Zero is ignored and the current order kept.
    pub fn set_ngram_order(&mut self, order: usize) {
        if order >= 1 {
            self.ngram_order = order;
        } else {
            warn!(
                "Ignoring n-gram order {}, keeping {}",
                order, self.ngram_order
            );
        }
    }

    /// Replace the exclusion filter
    pub fn set_exclude(&mut self, spec: &ExclusionSpec) {
        self.exclude = spec.compile();
    }

    /// Replace the exclusion filter from a configuration value
    pub fn set_exclude_value(&mut self, value: &serde_json::Value) -> Result<()> {
        self.set_exclude(&ExclusionSpec::from_value(value)?);
        Ok(())
    }

    /// Append a neutrality pattern
    pub fn add_neutral_pattern(&mut self, pattern: &str) -> Result<()> {
        self.neutrality.push(Regex::new(pattern)?);
        Ok(())
    }

    pub fn neutrality(&self) -> &NeutralityGuard {
        &self.neutrality
    }

    pub fn word_scores(&self) -> &ScoreTable {
        &self.word_scores
    }

    pub fn influencers(&self) -> &ScoreTable {
        &self.influencers
    }

    /// Merge entries into the lexicon, overwriting existing keys
    pub fn merge_word_scores<I, K>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        self.word_scores.merge(entries)
    }

    /// Merge entries into the influencer table, overwriting existing keys
    pub fn merge_influencers<I, K>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        self.influencers.merge(entries)
    }

    /// Phrases that survive exclusion, in fold order
    pub fn phrases(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize(text, self.ngram_order)
            .into_iter()
            .filter(|phrase| !self.exclude.excludes(phrase))
            .collect()
    }

    /// Score a text. Zero when a neutrality pattern matches.
    pub fn score(&self, text: &str) -> f64 {
        if self.neutrality.is_neutral(text) {
            debug!("Neutrality pattern matched, score forced to 0");
            return 0.0;
        }

        self.phrases(text)
            .iter()
            .fold(Scoring::default(), |scoring, phrase| {
                scoring
                    .step(phrase, &self.word_scores, &self.influencers)
                    .0
            })
            .score
    }

    /// Classify a text
    pub fn sentiment(&self, text: &str) -> Sentiment {
        classify(self.score(text), self.threshold)
    }

    /// Whether a text classifies as positive
    pub fn is_positive(&self, text: &str) -> bool {
        self.sentiment(text) == Sentiment::Positive
    }

    /// Score a text and keep the per-phrase trace
    pub fn analyze(&self, text: &str) -> SentimentReport {
        let start = Instant::now();
        let mut report = SentimentReport::new(text.to_string(), self.threshold);

        if self.neutrality.is_neutral(text) {
            report.neutral_override = true;
        } else {
            let phrases = self.phrases(text);
            report.phrase_count = phrases.len();

            let mut scoring = Scoring::default();
            for phrase in phrases {
                let (next, step) = scoring.step(&phrase, &self.word_scores, &self.influencers);
                let contribution = match step {
                    Step::Influenced { multiplier } => Contribution {
                        phrase,
                        kind: ContributionKind::Influencer,
                        weight: multiplier,
                        multiplier: next.current_influencer,
                        delta: 0.0,
                    },
                    Step::Scored { weight, multiplier } => Contribution {
                        phrase,
                        kind: ContributionKind::Scored,
                        weight,
                        multiplier,
                        delta: next.score - scoring.score,
                    },
                };
                report.contributions.push(contribution);
                scoring = next;
            }
            report.score = scoring.score;
        }

        report.sentiment = classify(report.score, self.threshold);
        report.processing_time_us = start.elapsed().as_micros() as u64;
        debug!("{}", report.summary());
        report
    }

    /// Merge a `<score> <phrase>` text file into the lexicon
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let merged = self.word_scores.merge(loader::hash_from_txt(path)?);
        info!("Loaded {} word scores from {}", merged, path.display());
        Ok(merged)
    }

    /// Merge a `<multiplier> <phrase>` text file into the influencer table
    pub fn load_influencers(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let merged = self.influencers.merge(loader::hash_from_txt(path)?);
        info!("Loaded {} influencers from {}", merged, path.display());
        Ok(merged)
    }

    /// Merge a JSON word-score object into the lexicon
    pub fn load_from_json(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let merged = self.word_scores.merge(loader::hash_from_json(path)?);
        info!("Loaded {} word scores from {}", merged, path.display());
        Ok(merged)
    }

    /// Merge a JSON influencer object into the influencer table
    pub fn load_influencers_from_json(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let merged = self.influencers.merge(loader::hash_from_json(path)?);
        info!("Loaded {} influencers from {}", merged, path.display());
        Ok(merged)
    }

    /// Merge the standard dictionaries found in `data_dir`
    ///
    /// Files are merged one at a time (`slang.json`, `en_words.json`, then
    /// `influencers.json`). Loading is not atomic: if a later file is missing or
    /// malformed, the error is returned but the files before it stay merged.
    pub fn load_defaults(&mut self, data_dir: impl AsRef<Path>) -> Result<usize> {
        let data_dir = data_dir.as_ref();
        let mut merged = 0;
        for file in loader::DEFAULT_WORD_FILES {
            merged += self.load_from_json(data_dir.join(file))?;
        }
        merged += self.load_influencers_from_json(data_dir.join(loader::DEFAULT_INFLUENCER_FILE))?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentimentScorer {
        let mut scorer = SentimentScorer::new();
        scorer.merge_word_scores([("good", 1.0), ("bad", -1.0)]);
        scorer.merge_influencers([("very", 2.0)]);
        scorer
    }

    #[test]
    fn test_influencer_applies_to_next_scored_word() {
        let scorer = scorer();
        assert_eq!(scorer.score("very good"), 2.0);
        assert_eq!(scorer.score("very very good"), 4.0);
        assert_eq!(scorer.score("good very"), 1.0);
    }

    #[test]
    fn test_influencer_consumed_by_unknown_word() {
        let scorer = scorer();
        // "movie" scores 0 but still consumes the pending multiplier
        assert_eq!(scorer.score("very movie good"), 1.0);
    }

    #[test]
    fn test_influencer_only_once() {
        let scorer = scorer();
        assert_eq!(scorer.score("very good good"), 3.0);
    }

    #[test]
    fn test_fold_step() {
        let scorer = scorer();
        let (next, step) = Scoring::default().step("very", &scorer.word_scores, &scorer.influencers);
        assert_eq!(next.current_influencer, 2.0);
        assert_eq!(step, Step::Influenced { multiplier: 2.0 });

        let (next, step) = next.step("bad", &scorer.word_scores, &scorer.influencers);
        assert_eq!(next.score, -2.0);
        assert_eq!(next.current_influencer, 1.0);
        assert_eq!(
            step,
            Step::Scored {
                weight: -1.0,
                multiplier: 2.0
            }
        );
    }

    #[test]
    fn test_zero_ngram_order_ignored() {
        let mut scorer = SentimentScorer::new();
        scorer.set_ngram_order(3);
        scorer.set_ngram_order(0);
        assert_eq!(scorer.ngram_order(), 3);

        let scorer = SentimentScorer::with_options(ScorerOptions {
            ngram_order: 0,
            ..Default::default()
        });
        assert_eq!(scorer.ngram_order(), 1);
    }

    #[test]
    fn test_analyze_traces_fold() {
        let scorer = scorer();
        let report = scorer.analyze("very bad");

        assert_eq!(report.score, -2.0);
        assert_eq!(report.sentiment, Sentiment::Negative);
        assert_eq!(report.phrase_count, 2);
        assert_eq!(report.contributions[0].kind, ContributionKind::Influencer);
        assert_eq!(report.contributions[1].delta, -2.0);
        assert_eq!(report.contributions[1].multiplier, 2.0);
    }

    #[test]
    fn test_analyze_neutral_override() {
        let mut scorer = scorer();
        scorer.add_neutral_pattern(r"\?$").unwrap();
        let report = scorer.analyze("is it good?");

        assert!(report.neutral_override);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.phrase_count, 0);
        assert_eq!(report.sentiment, Sentiment::Neutral);
    }
}
