//! Named view over a raw train record.

use crate::domain::{DurationError, InvalidStationCode, StationCode, TravelDuration};

use super::raw::RawRecord;

/// Field offsets within a query result line.
mod offset {
    pub const TRAIN_NUMBER: usize = 3;
    pub const ORIGIN: usize = 4;
    pub const DESTINATION: usize = 5;
    pub const DEPARTS: usize = 8;
    pub const ARRIVES: usize = 9;
    pub const DURATION: usize = 10;
    pub const SOFT_SLEEPER: usize = 24;
    pub const STANDING: usize = 26;
    pub const HARD_SLEEPER: usize = 28;
    pub const HARD_SEAT: usize = 29;
    pub const SECOND_CLASS: usize = 30;
    pub const FIRST_CLASS: usize = 31;

    /// Smallest field count that covers every offset above.
    pub const REQUIRED: usize = FIRST_CLASS + 1;
}

/// A raw record that cannot be read as a train.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    #[error("record has {fields} fields, at least {required} required")]
    TooShort { fields: usize, required: usize },

    #[error("record field {index}: {source}")]
    StationCode {
        index: usize,
        #[source]
        source: InvalidStationCode,
    },

    #[error("record field {index}: {source}")]
    Duration {
        index: usize,
        #[source]
        source: DurationError,
    },
}

/// Ticket availability for one seat class.
///
/// The API sends an empty string when the class is not sold on the train,
/// otherwise a count, `有` (available) or `无` (sold out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAvailability(Option<String>);

impl SeatAvailability {
    /// Shown in place of a class the train does not sell.
    pub const PLACEHOLDER: &'static str = "--";

    fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Self(None)
        } else {
            Self(Some(field.to_string()))
        }
    }

    /// The upstream value, if the class is sold.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The value to display, falling back to [`Self::PLACEHOLDER`].
    pub fn display(&self) -> &str {
        self.0.as_deref().unwrap_or(Self::PLACEHOLDER)
    }
}

/// Availability for every seat class shown in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seats {
    pub first_class: SeatAvailability,
    pub second_class: SeatAvailability,
    pub soft_sleeper: SeatAvailability,
    pub hard_sleeper: SeatAvailability,
    pub hard_seat: SeatAvailability,
    pub standing: SeatAvailability,
}

/// One train from the query response, with fields resolved by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRecord {
    pub train_number: String,
    pub origin: StationCode,
    pub destination: StationCode,
    pub departs: String,
    pub arrives: String,
    pub duration: TravelDuration,
    pub seats: Seats,
}

impl TryFrom<&RawRecord> for TrainRecord {
    type Error = MalformedRecord;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        if raw.len() < offset::REQUIRED {
            return Err(MalformedRecord::TooShort {
                fields: raw.len(),
                required: offset::REQUIRED,
            });
        }

        let field = move |index: usize| raw.get(index).unwrap_or_default();
        let station = move |index: usize| {
            StationCode::parse(field(index))
                .map_err(|source| MalformedRecord::StationCode { index, source })
        };
        let seat = move |index: usize| SeatAvailability::from_field(field(index));

        let duration = TravelDuration::parse(field(offset::DURATION)).map_err(|source| {
            MalformedRecord::Duration {
                index: offset::DURATION,
                source,
            }
        })?;

        Ok(Self {
            train_number: field(offset::TRAIN_NUMBER).to_string(),
            origin: station(offset::ORIGIN)?,
            destination: station(offset::DESTINATION)?,
            departs: field(offset::DEPARTS).to_string(),
            arrives: field(offset::ARRIVES).to_string(),
            duration,
            seats: Seats {
                first_class: seat(offset::FIRST_CLASS),
                second_class: seat(offset::SECOND_CLASS),
                soft_sleeper: seat(offset::SOFT_SLEEPER),
                hard_sleeper: seat(offset::HARD_SLEEPER),
                hard_seat: seat(offset::HARD_SEAT),
                standing: seat(offset::STANDING),
            },
        })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::line;
    use super::*;

    fn record(line: &str) -> Result<TrainRecord, MalformedRecord> {
        TrainRecord::try_from(&RawRecord::from_line(line))
    }

    #[test]
    fn reads_named_fields() {
        let train = record(&line("G101", "VNP", "AOH", "04:30")).unwrap();
        assert_eq!(train.train_number, "G101");
        assert_eq!(train.origin.as_str(), "VNP");
        assert_eq!(train.destination.as_str(), "AOH");
        assert_eq!(train.departs, "08:00");
        assert_eq!(train.arrives, "12:30");
        assert_eq!(train.duration.hours(), 4);
        assert_eq!(train.seats.first_class.as_str(), Some("12"));
        assert_eq!(train.seats.second_class.as_str(), Some("有"));
    }

    #[test]
    fn empty_seat_classes_use_placeholder() {
        let train = record(&line("G101", "VNP", "AOH", "04:30")).unwrap();
        assert_eq!(train.seats.soft_sleeper.as_str(), None);
        assert_eq!(train.seats.soft_sleeper.display(), "--");
        assert_eq!(train.seats.standing.display(), "--");
        assert_eq!(train.seats.first_class.display(), "12");
    }

    #[test]
    fn short_record_is_malformed() {
        let err = record("a|b|G101|VNP").unwrap_err();
        assert_eq!(
            err,
            MalformedRecord::TooShort {
                fields: 4,
                required: 32
            }
        );
        assert_eq!(err.to_string(), "record has 4 fields, at least 32 required");
    }

    #[test]
    fn exactly_required_fields_is_enough() {
        let full = line("K1", "BJP", "SHH", "20:00");
        let fields: Vec<&str> = full.split('|').take(32).collect();
        assert!(record(&fields.join("|")).is_ok());
    }

    #[test]
    fn bad_station_code_is_malformed() {
        let err = record(&line("G101", "vnp", "AOH", "04:30")).unwrap_err();
        assert!(matches!(err, MalformedRecord::StationCode { index: 4, .. }));
    }

    #[test]
    fn bad_duration_is_malformed() {
        let err = record(&line("G101", "VNP", "AOH", "4h30")).unwrap_err();
        assert!(matches!(err, MalformedRecord::Duration { index: 10, .. }));
    }
}
