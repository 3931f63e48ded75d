//! Scorer configuration.
//!
//! Read from a JSON file and/or environment variables (a `.env` file in the
//! working directory is honoured), validated, then turned into `ScorerOptions`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use validator::Validate;

use crate::error::{Result, SentimentError};
use crate::sentiment::{ExclusionSpec, ScoreTable, ScorerOptions, SentimentScorer};

/// Path of a JSON configuration file
pub const CONFIG_PATH_VAR: &str = "SENTIMENTAL_CONFIG";
pub const THRESHOLD_VAR: &str = "SENTIMENTAL_THRESHOLD";
pub const NGRAM_ORDER_VAR: &str = "SENTIMENTAL_NGRAM_ORDER";
/// Space-delimited list of words to exclude
pub const EXCLUDE_VAR: &str = "SENTIMENTAL_EXCLUDE";
/// Directory holding `slang.json`, `en_words.json` and `influencers.json`
pub const DATA_DIR_VAR: &str = "SENTIMENTAL_DATA_DIR";

/// Configuration for building a `SentimentScorer`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SentimentConfig {
    /// Neutral dead-zone around zero. Must be finite and non-negative.
    #[validate(range(min = 0.0))]
    pub threshold: f64,
    /// Largest phrase size looked up. Values below 1 are ignored.
    pub ngram_order: usize,
    /// Regex patterns that force a neutral result.
    pub neutral_patterns: Vec<String>,
    /// Inline lexicon entries.
    pub word_scores: ScoreTable,
    /// Inline influencer entries.
    pub influencers: ScoreTable,
    /// Exclusion filter: a word list string, `{"pattern": ".."}`, or an array of those.
    pub exclude: Value,
    /// Directory with the standard dictionaries, loaded by `build_scorer`.
    pub data_dir: Option<PathBuf>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            ngram_order: 1,
            neutral_patterns: vec![],
            word_scores: ScoreTable::new(),
            influencers: ScoreTable::new(),
            exclude: Value::Null,
            data_dir: None,
        }
    }
}

impl SentimentConfig {
    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: SentimentConfig = serde_json::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    /// Build a configuration from the environment.
    ///
    /// Starts from the file named by `SENTIMENTAL_CONFIG` (if set) and applies
    /// the `SENTIMENTAL_*` overrides on top.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                info!("Loading sentiment config from {}", path);
                Self::from_json_file(path)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(value) = env::var(THRESHOLD_VAR) {
            config.threshold = value.trim().parse().map_err(|e| {
                SentimentError::Config(format!("{} must be a number: {}", THRESHOLD_VAR, e))
            })?;
        }

        if let Ok(value) = env::var(NGRAM_ORDER_VAR) {
            let order: i64 = value.trim().parse().map_err(|e| {
                SentimentError::Config(format!("{} must be an integer: {}", NGRAM_ORDER_VAR, e))
            })?;
            if order >= 1 {
                config.ngram_order = order as usize;
            } else {
                warn!("Ignoring {}={}, keeping {}", NGRAM_ORDER_VAR, order, config.ngram_order);
            }
        }

        if let Ok(value) = env::var(EXCLUDE_VAR) {
            config.exclude = Value::String(value);
        }

        if let Ok(value) = env::var(DATA_DIR_VAR) {
            config.data_dir = Some(PathBuf::from(value));
        }

        config.check()?;
        Ok(config)
    }

    /// Field validation plus the checks the derive can't express.
    fn check(&self) -> Result<()> {
        self.validate()?;
        if !self.threshold.is_finite() {
            return Err(SentimentError::Config(format!(
                "threshold must be a finite number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Compile patterns and the exclusion filter into scorer options.
    pub fn into_options(self) -> Result<ScorerOptions> {
        self.check()?;

        let neutral_patterns = self
            .neutral_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ScorerOptions {
            threshold: self.threshold,
            word_scores: self.word_scores,
            neutral_patterns,
            ngram_order: self.ngram_order,
            influencers: self.influencers,
            exclude: ExclusionSpec::from_value(&self.exclude)?,
        })
    }

    /// Build a scorer, loading the standard dictionaries when `data_dir` is set.
    pub fn build_scorer(self) -> Result<SentimentScorer> {
        let data_dir = self.data_dir.clone();
        let mut scorer = SentimentScorer::with_options(self.into_options()?);

        if let Some(dir) = data_dir {
            let merged = scorer.load_defaults(&dir)?;
            info!("Loaded {} dictionary entries from {}", merged, dir.display());
        }

        info!(
            "Sentiment scorer ready: {} word scores, {} influencers, {} neutral patterns, n-gram order {}",
            scorer.word_scores().len(),
            scorer.influencers().len(),
            scorer.neutrality().len(),
            scorer.ngram_order()
        );
        Ok(scorer)
    }
}
