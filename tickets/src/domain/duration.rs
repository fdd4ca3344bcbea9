//! Travel duration formatting.
//!
//! 12306 reports journey length as an `HH:MM` string. Hours may exceed 23
//! (long-distance trains) and `99:59` marks a suspended service, so this is
//! deliberately not a time of day.

use std::fmt;

use super::locale::DurationUnits;

/// Error returned when a duration is not in `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration {raw:?}: {reason}")]
pub struct DurationError {
    raw: String,
    reason: &'static str,
}

impl DurationError {
    fn new(raw: &str, reason: &'static str) -> Self {
        Self {
            raw: raw.to_string(),
            reason,
        }
    }
}

/// A validated `HH:MM` travel duration.
///
/// The digits are kept as written so that formatting reproduces the
/// upstream minutes verbatim (`02:05` keeps its `05`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TravelDuration {
    hours: [u8; 2],
    minutes: [u8; 2],
}

impl TravelDuration {
    /// Parse a duration from `HH:MM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tickets::domain::TravelDuration;
    ///
    /// assert!(TravelDuration::parse("02:30").is_ok());
    /// assert!(TravelDuration::parse("36:10").is_ok());
    /// assert!(TravelDuration::parse("2:30").is_err());
    /// assert!(TravelDuration::parse("02:75").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DurationError> {
        let bytes = raw.as_bytes();

        if bytes.len() != 5 {
            return Err(DurationError::new(raw, "expected HH:MM format"));
        }
        if bytes[2] != b':' {
            return Err(DurationError::new(raw, "expected colon at position 2"));
        }
        if !bytes[..2].iter().all(u8::is_ascii_digit) {
            return Err(DurationError::new(raw, "invalid hour digits"));
        }
        if !bytes[3..].iter().all(u8::is_ascii_digit) {
            return Err(DurationError::new(raw, "invalid minute digits"));
        }
        if bytes[3] > b'5' {
            return Err(DurationError::new(raw, "minute must be 0-59"));
        }

        Ok(Self {
            hours: [bytes[0], bytes[1]],
            minutes: [bytes[3], bytes[4]],
        })
    }

    /// Whole hours.
    pub fn hours(&self) -> u32 {
        u32::from(self.hours[0] - b'0') * 10 + u32::from(self.hours[1] - b'0')
    }

    /// Minutes past the hour.
    pub fn minutes(&self) -> u32 {
        u32::from(self.minutes[0] - b'0') * 10 + u32::from(self.minutes[1] - b'0')
    }

    /// Render as `<hours><hour unit><minutes><minute unit>`.
    ///
    /// A `00` hour is dropped entirely and a single leading zero is
    /// stripped from the hour. Minutes are left as written.
    pub fn format(&self, units: DurationUnits) -> String {
        let minutes = self.digits(&self.minutes);
        let hours = match self.hours {
            [b'0', b'0'] => return format!("{minutes}{}", units.minute),
            [b'0', _] => &self.digits(&self.hours)[1..],
            _ => self.digits(&self.hours),
        };
        format!("{hours}{}{minutes}{}", units.hour, units.minute)
    }

    fn digits<'a>(&self, pair: &'a [u8; 2]) -> &'a str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(pair).unwrap_or_default()
    }
}

impl fmt::Debug for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TravelDuration({}:{})",
            self.digits(&self.hours),
            self.digits(&self.minutes)
        )
    }
}

/// Format a raw `HH:MM` duration with the given units.
pub fn format_duration(raw: &str, units: DurationUnits) -> Result<String, DurationError> {
    Ok(TravelDuration::parse(raw)?.format(units))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Locale;
    use proptest::prelude::*;

    fn en(raw: &str) -> String {
        format_duration(raw, Locale::En.duration_units()).unwrap()
    }

    proptest! {
        #[test]
        fn zero_hour_has_no_hour_component(m in "[0-5][0-9]") {
            let out = en(&format!("00:{m}"));
            prop_assert_eq!(out, format!("{m}minute"));
        }

        #[test]
        fn leading_zero_is_stripped(h in "[1-9]", m in "[0-5][0-9]") {
            let out = en(&format!("0{h}:{m}"));
            prop_assert_eq!(out, format!("{h}hour{m}minute"));
        }

        #[test]
        fn two_digit_hour_is_kept(h in "[1-9][0-9]", m in "[0-5][0-9]") {
            let out = en(&format!("{h}:{m}"));
            prop_assert_eq!(out, format!("{h}hour{m}minute"));
        }
    }
}
