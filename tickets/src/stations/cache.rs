//! On-disk copy of the station list.
//!
//! The list changes rarely and is large, so a successful download is kept
//! as JSON and reused until it goes stale. A cache written for a different
//! source URL is never reused.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::StationError;
use super::names::StationEntry;

const CACHE_FILE_NAME: &str = "station_names.json";

/// Default time to live: one day.
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Serialize, Deserialize)]
struct CacheFile<S> {
    /// Seconds since the Unix epoch at write time.
    written_at: u64,
    /// URL the stations were fetched from.
    source: String,
    stations: S,
}

/// Where the cache lives and how long it stays valid.
#[derive(Debug, Clone)]
pub struct StationCacheConfig {
    pub path: PathBuf,
    pub ttl: Duration,
}

impl StationCacheConfig {
    /// Cache at `path` with the default one-day TTL.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for StationCacheConfig {
    fn default() -> Self {
        let path = dirs::cache_dir()
            .map(|dir| dir.join("tickets").join(CACHE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CACHE_FILE_NAME));
        Self::new(path)
    }
}

/// JSON file cache of a station list.
#[derive(Debug, Clone)]
pub struct StationCache {
    config: StationCacheConfig,
}

impl StationCache {
    pub fn new(config: StationCacheConfig) -> Self {
        Self { config }
    }

    /// Load the stations cached for `source`.
    ///
    /// Any miss (no file, unreadable JSON, other source, expired) returns
    /// `None`; the reason is logged at debug level.
    pub fn load(&self, source: &str) -> Option<Vec<StationEntry>> {
        let path = &self.config.path;
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "station cache unavailable");
                return None;
            }
        };

        let cached: CacheFile<Vec<StationEntry>> = match serde_json::from_str(&contents) {
            Ok(cached) => cached,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "station cache unreadable");
                return None;
            }
        };

        if cached.source != source {
            debug!(cached = %cached.source, wanted = source, "station cache is for another source");
            return None;
        }

        let age = unix_now().ok()?.saturating_sub(cached.written_at);
        if age >= self.config.ttl.as_secs() {
            debug!(age_secs = age, "station cache expired");
            return None;
        }

        Some(cached.stations)
    }

    /// Write `stations` fetched from `source`, creating parent directories.
    pub fn save(&self, source: &str, stations: &[StationEntry]) -> Result<(), StationError> {
        let file = CacheFile {
            written_at: unix_now()?,
            source: source.to_string(),
            stations,
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StationError::Cache {
                message: format!("cannot create {}: {e}", parent.display()),
            })?;
        }

        let json = serde_json::to_string(&file).map_err(|e| StationError::Cache {
            message: format!("cannot serialize stations: {e}"),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| StationError::Cache {
            message: format!("cannot write {}: {e}", self.config.path.display()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

fn unix_now() -> Result<u64, StationError> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| StationError::Cache {
            message: "system clock is before the Unix epoch".to_string(),
        })
}
