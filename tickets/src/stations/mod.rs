//! Station name ↔ telecode lookup.
//!
//! 12306 publishes every station as an entry in `station_name.js`. The
//! entries are parsed into a [`StationDirectory`], which resolves place
//! names typed on the command line to telecodes and telecodes in query
//! results back to display names.

mod cache;
mod client;
mod directory;
mod error;
mod loader;
mod names;

pub use cache::{StationCache, StationCacheConfig};
pub use client::{StationClient, StationClientConfig};
pub use directory::{StationDirectory, StationLookup};
pub use error::StationError;
pub use loader::StationLoader;
pub use names::{StationEntry, parse_station_names};
