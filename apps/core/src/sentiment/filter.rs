//! Exclusion filters.
//!
//! An `ExclusionSpec` describes which phrases to drop before scoring. It is
//! compiled once into an `ExclusionFilter` and evaluated per phrase.

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SentimentError};

/// Caller-supplied exclusion predicate.
pub type ExcludePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Description of the phrases to exclude.
#[derive(Clone, Default)]
pub enum ExclusionSpec {
    /// Exclude nothing.
    #[default]
    Nothing,
    /// Space-delimited list of words, matched exactly and case-insensitively.
    Words(String),
    /// Exclude phrases the pattern matches anywhere.
    Pattern(Regex),
    /// Exclude phrases for which the predicate returns `true`.
    Custom(ExcludePredicate),
    /// Exclude phrases matched by any of the nested specs.
    Any(Vec<ExclusionSpec>),
}

impl fmt::Debug for ExclusionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionSpec::Nothing => write!(f, "Nothing"),
            ExclusionSpec::Words(words) => f.debug_tuple("Words").field(words).finish(),
            ExclusionSpec::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            ExclusionSpec::Custom(_) => write!(f, "Custom(<fn>)"),
            ExclusionSpec::Any(specs) => f.debug_tuple("Any").field(specs).finish(),
        }
    }
}

impl ExclusionSpec {
    /// Wrap a closure as a custom spec.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        ExclusionSpec::Custom(Arc::new(predicate))
    }

    /// Compile a regex pattern spec.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(ExclusionSpec::Pattern(Regex::new(pattern)?))
    }

    /// Resolve a spec from a configuration value.
    ///
    /// `null` excludes nothing, a string is a word list, an array combines
    /// nested values and `{"pattern": "..."}` is a regex.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(ExclusionSpec::Nothing),
            Value::String(words) => Ok(ExclusionSpec::Words(words.clone())),
            Value::Array(items) => items
                .iter()
                .map(ExclusionSpec::from_value)
                .collect::<Result<Vec<_>>>()
                .map(ExclusionSpec::Any),
            Value::Object(map) => match map.get("pattern") {
                Some(Value::String(pattern)) => ExclusionSpec::pattern(pattern),
                _ => Err(SentimentError::InvalidFilterSpec(format!(
                    "object filters need a string \"pattern\" field, got {}",
                    value
                ))),
            },
            other => Err(SentimentError::InvalidFilterSpec(format!(
                "filter must be a string, array, pattern or callable, got {}",
                other
            ))),
        }
    }

    /// Compile into a reusable filter.
    pub fn compile(&self) -> ExclusionFilter {
        match self {
            ExclusionSpec::Nothing => ExclusionFilter::Never,
            ExclusionSpec::Words(words) => {
                ExclusionFilter::Words(words.split_whitespace().map(str::to_lowercase).collect())
            }
            ExclusionSpec::Pattern(re) => ExclusionFilter::Pattern(re.clone()),
            ExclusionSpec::Custom(predicate) => ExclusionFilter::Custom(Arc::clone(predicate)),
            ExclusionSpec::Any(specs) => {
                ExclusionFilter::Any(specs.iter().map(ExclusionSpec::compile).collect())
            }
        }
    }
}

impl From<&str> for ExclusionSpec {
    fn from(words: &str) -> Self {
        ExclusionSpec::Words(words.to_string())
    }
}

impl From<Regex> for ExclusionSpec {
    fn from(re: Regex) -> Self {
        ExclusionSpec::Pattern(re)
    }
}

impl From<Vec<ExclusionSpec>> for ExclusionSpec {
    fn from(specs: Vec<ExclusionSpec>) -> Self {
        ExclusionSpec::Any(specs)
    }
}

/// Compiled exclusion predicate.
#[derive(Clone, Default)]
pub enum ExclusionFilter {
    #[default]
    Never,
    Words(HashSet<String>),
    Pattern(Regex),
    Custom(ExcludePredicate),
    Any(Vec<ExclusionFilter>),
}

impl fmt::Debug for ExclusionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionFilter::Never => write!(f, "Never"),
            ExclusionFilter::Words(words) => f.debug_tuple("Words").field(words).finish(),
            ExclusionFilter::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            ExclusionFilter::Custom(_) => write!(f, "Custom(<fn>)"),
            ExclusionFilter::Any(filters) => f.debug_tuple("Any").field(filters).finish(),
        }
    }
}

impl ExclusionFilter {
    /// Whether `phrase` should be dropped before scoring.
    pub fn excludes(&self, phrase: &str) -> bool {
        match self {
            ExclusionFilter::Never => false,
            ExclusionFilter::Words(words) => words.contains(&phrase.to_lowercase()),
            ExclusionFilter::Pattern(re) => re.is_match(phrase),
            ExclusionFilter::Custom(predicate) => predicate(phrase),
            ExclusionFilter::Any(filters) => filters.iter().any(|f| f.excludes(phrase)),
        }
    }
}
