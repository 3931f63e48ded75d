//! Neutrality overrides.
//!
//! Patterns are matched against the raw, untokenized text. A single hit forces
//! the score to zero.

use regex::Regex;

use crate::error::Result;

/// Ordered list of patterns that neutralize a text.
#[derive(Debug, Clone, Default)]
pub struct NeutralityGuard {
    patterns: Vec<Regex>,
}

impl NeutralityGuard {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    /// Compile a list of pattern strings.
    pub fn from_strings<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn push(&mut self, pattern: Regex) {
        self.patterns.push(pattern);
    }

    /// True if any pattern matches `text`. Stops at the first match.
    pub fn is_neutral(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
