//! Default-valued word/phrase tables.
//!
//! Both the lexicon (word scores) and the influencer table are `ScoreTable`s:
//! a lookup on an unknown key answers `0.0` instead of failing.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Word or phrase to weight mapping with a `0.0` default.
///
/// Keys are lowercased on the way in. When two keys collapse to the same
/// lowercase form, the one inserted last wins, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "HashMap<String, f64>")]
pub struct ScoreTable {
    entries: HashMap<String, f64>,
}

impl ScoreTable {
    /// Value returned for keys that are not in the table.
    pub const DEFAULT: f64 = 0.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of `phrase`, or `0.0` when absent.
    pub fn get(&self, phrase: &str) -> f64 {
        self.entries.get(phrase).copied().unwrap_or(Self::DEFAULT)
    }

    /// Insert a single entry. Keys are lowercased so they line up with tokens.
    pub fn insert(&mut self, phrase: impl AsRef<str>, weight: f64) {
        self.entries.insert(phrase.as_ref().to_lowercase(), weight);
    }

    /// Merge entries in, overwriting existing keys. Returns how many were merged.
    pub fn merge<I, K>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut merged = 0;
        for (phrase, weight) in entries {
            self.insert(phrase, weight);
            merged += 1;
        }
        merged
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

impl<K: AsRef<str>> FromIterator<(K, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = ScoreTable::new();
        table.merge(iter);
        table
    }
}

impl From<ScoreTable> for HashMap<String, f64> {
    fn from(table: ScoreTable) -> Self {
        table.entries
    }
}

struct ScoreTableVisitor;

impl<'de> Visitor<'de> for ScoreTableVisitor {
    type Value = ScoreTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of phrase to numeric score")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = ScoreTable::new();
        // Entries arrive in document order, so later keys overwrite earlier ones.
        while let Some((phrase, weight)) = access.next_entry::<String, f64>()? {
            table.insert(phrase, weight);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for ScoreTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScoreTableVisitor)
    }
}
