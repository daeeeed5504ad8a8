use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreInput;

/// Current on-disk format version
pub const HISTORY_VERSION: u32 = 1;

/// Default number of results kept
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name_a: String,
    pub name_b: String,
    #[serde(default)]
    pub date_a: Option<NaiveDate>,
    #[serde(default)]
    pub date_b: Option<NaiveDate>,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(input: &ScoreInput, score: u8, timestamp: DateTime<Utc>) -> Self {
        Self {
            name_a: input.name_a.clone(),
            name_b: input.name_b.clone(),
            date_a: input.date_a,
            date_b: input.date_b,
            score,
            timestamp,
        }
    }

    /// Rebuild the input this entry was computed from
    pub fn input(&self) -> ScoreInput {
        ScoreInput {
            name_a: self.name_a.clone(),
            name_b: self.name_b.clone(),
            date_a: self.date_a,
            date_b: self.date_b,
        }
    }

    /// Entries are the same calculation when the whole input tuple matches
    pub fn same_input(&self, other: &HistoryEntry) -> bool {
        self.name_a == other.name_a
            && self.name_b == other.name_b
            && self.date_a == other.date_a
            && self.date_b == other.date_b
    }
}

/// Most recent results, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub version: u32,
    #[serde(default)]
    pub recent: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history with the current version
    pub fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            recent: Vec::new(),
        }
    }

    /// Put `entry` at the front, dropping any older entry with the same input,
    /// then keep at most `limit` entries.
    pub fn record(&mut self, entry: HistoryEntry, limit: usize) {
        self.recent.retain(|existing| !existing.same_input(&entry));
        self.recent.insert(0, entry);
        self.recent.truncate(limit);
    }

    /// Entry at a 1-based index, as shown in the recent table
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        index.checked_sub(1).and_then(|i| self.recent.get(i))
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
