//! Station telecode type.

use std::fmt;

/// Error returned when parsing an invalid station telecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationCode {
    code: String,
    reason: &'static str,
}

/// A valid 3-letter 12306 station telecode (e.g. `BJP` for Beijing).
///
/// Telecodes are always 3 uppercase ASCII letters. This type guarantees
/// that any `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use tickets::domain::StationCode;
///
/// let bjp = StationCode::parse("BJP").unwrap();
/// assert_eq!(bjp.as_str(), "BJP");
///
/// assert!(StationCode::parse("bjp").is_err());
/// assert!(StationCode::parse("BJ").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a telecode from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                code: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidStationCode {
                code: s.to_string(),
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the telecode as a string slice.
    pub fn as_str(&self) -> &str {
        // Only uppercase ASCII is ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
