//! Category filter and projection into display rows.

use tracing::trace;

use crate::domain::{FilterOptions, Locale, StationCode};
use crate::record::{MalformedRecord, RawRecord, TrainRecord};
use crate::stations::StationLookup;

use super::row::{DisplayRow, Stops};

/// Errors raised while projecting records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// A record could not be read as a train.
    #[error("malformed record: {0}")]
    Malformed(#[from] MalformedRecord),

    /// A station code in the response has no known name.
    #[error("unknown station code {code} on train {train}")]
    UnknownStationCode { code: StationCode, train: String },
}

/// Lazily filter and project records for display.
///
/// Records are visited in response order. Every record must be well-formed,
/// including ones the filter would drop: a malformed record is reported
/// where it occurs. Rows are produced on demand; the iterator is finite and
/// borrowed from `records`.
pub fn project<'a, L>(
    records: &'a [RawRecord],
    lookup: &'a L,
    filter: &'a FilterOptions,
    locale: Locale,
) -> impl Iterator<Item = Result<DisplayRow, ProjectionError>> + 'a
where
    L: StationLookup + ?Sized,
{
    records.iter().filter_map(move |raw| {
        let train = match TrainRecord::try_from(raw) {
            Ok(train) => train,
            Err(e) => return Some(Err(e.into())),
        };

        if !filter.accepts(&train.train_number) {
            trace!(train = %train.train_number, "filtered out");
            return None;
        }

        Some(to_row(train, lookup, locale))
    })
}

fn to_row<L>(train: TrainRecord, lookup: &L, locale: Locale) -> Result<DisplayRow, ProjectionError>
where
    L: StationLookup + ?Sized,
{
    let name = |code: StationCode| {
        lookup
            .name_of(&code)
            .map(str::to_string)
            .ok_or_else(|| ProjectionError::UnknownStationCode {
                code,
                train: train.train_number.clone(),
            })
    };

    let stations = Stops {
        departure: name(train.origin)?,
        arrival: name(train.destination)?,
    };

    Ok(DisplayRow {
        stations,
        times: Stops {
            departure: train.departs,
            arrival: train.arrives,
        },
        duration: train.duration.format(locale.duration_units()),
        seats: train.seats,
        train_number: train.train_number,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::TrainCategory;
    use crate::record::{fixtures::line, parse};

    fn lookup() -> HashMap<StationCode, String> {
        [("VNP", "北京南"), ("AOH", "上海虹桥"), ("BJP", "北京"), ("SHH", "上海")]
            .into_iter()
            .map(|(code, name)| (StationCode::parse(code).unwrap(), name.to_string()))
            .collect()
    }

    fn records() -> Vec<RawRecord> {
        parse([
            line("G101", "VNP", "AOH", "04:30"),
            line("D313", "BJP", "SHH", "11:42"),
            line("T109", "BJP", "SHH", "15:18"),
            line("Z281", "BJP", "SHH", "00:45"),
        ])
    }

    fn run(
        records: &[RawRecord],
        filter: &FilterOptions,
    ) -> Result<Vec<DisplayRow>, ProjectionError> {
        project(records, &lookup(), filter, Locale::En).collect()
    }

    fn trains(rows: &[DisplayRow]) -> Vec<&str> {
        rows.iter().map(|r| r.train_number.as_str()).collect()
    }

    #[test]
    fn high_speed_filter_projects_one_row() {
        let records = parse([line("G101", "VNP", "AOH", "02:30")]);
        let filter = FilterOptions::all().with(TrainCategory::HighSpeed);
        let rows = run(&records, &filter).unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.train_number, "G101");
        assert_eq!(row.duration, "2hour30minute");
        assert_eq!(row.stations.departure, "北京南");
        assert_eq!(row.stations.arrival, "上海虹桥");
        assert_eq!(row.times.departure, "08:00");
        assert_eq!(row.times.arrival, "12:30");
        assert_eq!(row.seats.soft_sleeper.display(), "--");
        assert_eq!(row.seats.hard_seat.display(), "--");
        assert_eq!(row.seats.second_class.display(), "有");
    }

    #[test]
    fn non_matching_filter_yields_nothing() {
        let records = parse([line("G101", "VNP", "AOH", "02:30")]);
        let filter = FilterOptions::all().with(TrainCategory::Bullet);
        assert!(run(&records, &filter).unwrap().is_empty());
    }

    #[test]
    fn empty_filter_keeps_response_order() {
        let rows = run(&records(), &FilterOptions::all()).unwrap();
        assert_eq!(trains(&rows), ["G101", "D313", "T109", "Z281"]);
    }

    #[test]
    fn multiple_categories() {
        let filter = FilterOptions::all()
            .with(TrainCategory::Direct)
            .with(TrainCategory::HighSpeed);
        let rows = run(&records(), &filter).unwrap();
        assert_eq!(trains(&rows), ["G101", "Z281"]);
        assert_eq!(rows[1].duration, "45minute");
    }

    #[test]
    fn projection_is_repeatable() {
        let records = records();
        let filter = FilterOptions::all().with(TrainCategory::Express);
        assert_eq!(run(&records, &filter), run(&records, &filter));
    }

    #[test]
    fn chinese_duration_units() {
        let records = parse([line("G101", "VNP", "AOH", "04:48")]);
        let filter = FilterOptions::all();
        let rows: Vec<_> = project(&records, &lookup(), &filter, Locale::Zh)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows[0].duration, "4小时48分");
    }

    #[test]
    fn unknown_station_code_is_an_error() {
        let records = parse([line("G101", "VNP", "XYZ", "04:30")]);
        let err = run(&records, &FilterOptions::all()).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::UnknownStationCode {
                code: StationCode::parse("XYZ").unwrap(),
                train: "G101".to_string(),
            }
        );
        assert_eq!(err.to_string(), "unknown station code XYZ on train G101");
    }

    #[test]
    fn malformed_record_is_an_error_even_when_filtered() {
        let records = parse(["G101|short".to_string()]);
        let filter = FilterOptions::all().with(TrainCategory::Bullet);
        let err = run(&records, &filter).unwrap_err();
        assert!(matches!(err, ProjectionError::Malformed(MalformedRecord::TooShort { .. })));
    }

    #[test]
    fn rows_are_produced_lazily() {
        let records = parse([
            line("G101", "VNP", "AOH", "04:30"),
            "broken".to_string(),
        ]);
        let lookup = lookup();
        let filter = FilterOptions::all();
        let mut rows = project(&records, &lookup, &filter, Locale::En);

        assert!(rows.next().unwrap().is_ok());
        assert!(rows.next().unwrap().is_err());
        assert!(rows.next().is_none());
    }
}
