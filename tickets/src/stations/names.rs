//! Parser for the `station_name.js` feed.
//!
//! The feed is a single JavaScript assignment:
//!
//! ```text
//! var station_names ='@bjb|北京北|VAP|beijingbei|bjb|0@bjd|北京东|BOP|beijingdong|bjd|1';
//! ```
//!
//! Each `@`-separated entry holds, in order: short abbreviation, Chinese
//! name, telecode, full pinyin, pinyin initials, index. Newer feeds append
//! further fields, which are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One station as listed in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEntry {
    pub name: String,
    pub code: String,
    pub pinyin: String,
}

/// Parse every well-formed entry from a `station_name.js` body.
///
/// Entries with fewer than four fields or an empty name or code are
/// skipped. Telecode validity is checked later, when the directory is
/// built.
pub fn parse_station_names(body: &str) -> Vec<StationEntry> {
    let Some(start) = body.find('@') else {
        return Vec::new();
    };
    let list = body[start..]
        .trim_end()
        .trim_end_matches(';')
        .trim_end_matches(['\'', '"']);

    list.split('@')
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let fields: Vec<&str> = entry.split('|').collect();
            match fields.as_slice() {
                [_, name, code, pinyin, ..] if !name.is_empty() && !code.is_empty() => {
                    Some(StationEntry {
                        name: name.to_string(),
                        code: code.to_string(),
                        pinyin: pinyin.to_string(),
                    })
                }
                _ => {
                    debug!(entry, "skipping malformed station entry");
                    None
                }
            }
        })
        .collect()
}
