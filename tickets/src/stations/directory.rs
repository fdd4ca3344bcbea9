//! Station name and telecode lookup tables.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::domain::StationCode;

use super::names::StationEntry;

/// Resolves telecodes found in query results to display names.
pub trait StationLookup {
    /// The display name for a telecode, if known.
    fn name_of(&self, code: &StationCode) -> Option<&str>;
}

impl StationLookup for HashMap<StationCode, String> {
    fn name_of(&self, code: &StationCode) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}

/// Immutable name → code and code → name mappings.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    by_name: HashMap<String, StationCode>,
    by_code: HashMap<StationCode, String>,
}

impl StationDirectory {
    /// Build the directory from feed entries.
    ///
    /// Entries with an invalid telecode are dropped. Names are indexed by
    /// their Chinese name and by lower-case pinyin; when two stations share
    /// a key the first one listed wins.
    pub fn new(entries: impl IntoIterator<Item = StationEntry>) -> Self {
        let mut directory = Self::default();

        for entry in entries {
            let code = match StationCode::parse(&entry.code) {
                Ok(code) => code,
                Err(e) => {
                    debug!(name = %entry.name, error = %e, "skipping station");
                    continue;
                }
            };

            if let Entry::Vacant(slot) = directory.by_code.entry(code) {
                slot.insert(entry.name.clone());
            }
            if !entry.pinyin.is_empty() {
                directory
                    .by_name
                    .entry(entry.pinyin.to_lowercase())
                    .or_insert(code);
            }
            directory.by_name.entry(entry.name).or_insert(code);
        }

        directory
    }

    /// The telecode for a place name (Chinese or pinyin).
    pub fn code_of(&self, name: &str) -> Option<StationCode> {
        let name = name.trim();
        self.by_name
            .get(name)
            .or_else(|| self.by_name.get(&name.to_lowercase()))
            .copied()
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if no station is known.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl StationLookup for StationDirectory {
    fn name_of(&self, code: &StationCode) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }
}
