//! Travel date type.

use std::fmt;

use chrono::NaiveDate;

/// Error returned when a travel date is not a real `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel date {raw:?}: expected YYYY-MM-DD")]
pub struct InvalidTravelDate {
    raw: String,
}

/// A calendar date on which to travel.
///
/// # Examples
///
/// ```
/// use tickets::domain::TravelDate;
///
/// let date = TravelDate::parse("2016-10-10").unwrap();
/// assert_eq!(date.to_string(), "2016-10-10");
///
/// assert!(TravelDate::parse("2016-02-30").is_err());
/// assert!(TravelDate::parse("10/10/2016").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse a strict `YYYY-MM-DD` date.
    pub fn parse(s: &str) -> Result<Self, InvalidTravelDate> {
        // chrono accepts unpadded fields; the API does not.
        if s.len() != 10 {
            return Err(InvalidTravelDate { raw: s.to_string() });
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(TravelDate)
            .map_err(|_| InvalidTravelDate { raw: s.to_string() })
    }

    /// Returns the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for TravelDate {
    fn from(date: NaiveDate) -> Self {
        TravelDate(date)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
