//! Dictionary loading.
//!
//! Reads word/phrase weights from flat text files (`<score> <phrase>` per
//! line) and from JSON objects (`{"phrase": score}`). The scoring pipeline
//! never calls into this module on its own; callers merge what it returns.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::sentiment::ScoreTable;

/// Dictionary files merged by `SentimentScorer::load_defaults`, relative to the data directory.
pub const DEFAULT_WORD_FILES: &[&str] = &["slang.json", "en_words.json"];
pub const DEFAULT_INFLUENCER_FILE: &str = "influencers.json";

/// Parse `<score><whitespace><phrase>` lines.
///
/// Phrases are lowercased, so case variants of one phrase collapse into a
/// single entry and the later line wins. Blank lines and `#` comments are
/// ignored. Lines without a numeric leading field or without a phrase are
/// skipped with a warning.
pub fn hash_from_reader<R: BufRead>(reader: R, source: &str) -> Result<HashMap<String, f64>> {
    let mut words = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((score, phrase)) = trimmed.split_once(char::is_whitespace) else {
            warn!("{}:{}: missing phrase, skipping line", source, index + 1);
            continue;
        };

        let phrase = phrase.trim();
        if phrase.is_empty() {
            warn!("{}:{}: missing phrase, skipping line", source, index + 1);
            continue;
        }

        match score.parse::<f64>() {
            Ok(score) => {
                words.insert(phrase.to_lowercase(), score);
            }
            Err(e) => {
                warn!(
                    "{}:{}: invalid score {:?} ({}), skipping line",
                    source,
                    index + 1,
                    score,
                    e
                );
            }
        }
    }

    debug!("Parsed {} entries from {}", words.len(), source);
    Ok(words)
}

/// Read a flat `<score> <phrase>` text file.
pub fn hash_from_txt(path: impl AsRef<Path>) -> Result<HashMap<String, f64>> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    hash_from_reader(BufReader::new(file), &path.display().to_string())
}

/// Read a JSON object of phrase to score.
///
/// Keys are lowercased in document order, so a later case variant wins.
pub fn hash_from_json(path: impl AsRef<Path>) -> Result<HashMap<String, f64>> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let words: ScoreTable = serde_json::from_reader(BufReader::new(file))?;
    debug!("Parsed {} entries from {}", words.len(), path.display());
    Ok(words.into())
}
