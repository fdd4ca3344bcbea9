//! Station data error types.

/// Errors that can occur while loading station data.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("station list request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// A local station file could not be read
    #[error("failed to read station file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The station list contained no usable entries
    #[error("station list is empty")]
    Empty,

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
