//! The ten-column display row.

use crate::record::Seats;

/// A departure/arrival pair.
///
/// Used for both station names and times so that the presentation layer
/// decides how to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stops<T> {
    pub departure: T,
    pub arrival: T,
}

/// One train, projected into the table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub train_number: String,
    pub stations: Stops<String>,
    pub times: Stops<String>,
    pub duration: String,
    pub seats: Seats,
}

/// The content of one table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Text(&'a str),
    Stops(&'a Stops<String>),
}

impl DisplayRow {
    /// Number of columns in every row.
    pub const COLUMNS: usize = 10;

    /// The cells of this row in header order.
    pub fn cells(&self) -> [Cell<'_>; Self::COLUMNS] {
        [
            Cell::Text(&self.train_number),
            Cell::Stops(&self.stations),
            Cell::Stops(&self.times),
            Cell::Text(&self.duration),
            Cell::Text(self.seats.first_class.display()),
            Cell::Text(self.seats.second_class.display()),
            Cell::Text(self.seats.soft_sleeper.display()),
            Cell::Text(self.seats.hard_sleeper.display()),
            Cell::Text(self.seats.hard_seat.display()),
            Cell::Text(self.seats.standing.display()),
        ]
    }
}
