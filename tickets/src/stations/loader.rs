//! Choosing where station data comes from.

use std::path::PathBuf;

use tracing::{info, warn};

use super::cache::StationCache;
use super::client::StationClient;
use super::directory::StationDirectory;
use super::error::StationError;
use super::names::{StationEntry, parse_station_names};

/// Builds a [`StationDirectory`] from the first available source.
///
/// Sources are tried in order: an explicit local file, a fresh disk cache,
/// then the network. A network download refreshes the cache; failing to
/// write the cache is logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct StationLoader {
    client: StationClient,
    file: Option<PathBuf>,
    cache: Option<StationCache>,
}

impl StationLoader {
    pub fn new(client: StationClient) -> Self {
        Self {
            client,
            file: None,
            cache: None,
        }
    }

    /// Read stations from a local `station_name.js` instead of the network.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Use a disk cache in front of the network.
    pub fn with_cache(mut self, cache: StationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Load the directory.
    pub async fn load(&self) -> Result<StationDirectory, StationError> {
        let entries = self.entries().await?;
        let directory = StationDirectory::new(entries);
        if directory.is_empty() {
            return Err(StationError::Empty);
        }
        Ok(directory)
    }

    async fn entries(&self) -> Result<Vec<StationEntry>, StationError> {
        if let Some(path) = &self.file {
            let body = std::fs::read_to_string(path).map_err(|source| StationError::File {
                path: path.display().to_string(),
                source,
            })?;
            info!(path = %path.display(), "loading stations from file");
            return Ok(parse_station_names(&body));
        }

        let source = self.client.url();
        if let Some(stations) = self.cache.as_ref().and_then(|c| c.load(source)) {
            info!(count = stations.len(), "loaded stations from cache");
            return Ok(stations);
        }

        let stations = self.client.fetch_all().await?;
        if let Some(cache) = &self.cache
            && let Err(e) = cache.save(source, &stations)
        {
            warn!(error = %e, "failed to cache station list");
        }
        Ok(stations)
    }
}
