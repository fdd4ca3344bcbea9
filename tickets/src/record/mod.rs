//! Parsing of the pipe-delimited train lines returned by 12306.
//!
//! Each line of `data.result` describes one train as ~35 positional
//! fields. [`parse`] splits lines into [`RawRecord`]s, and
//! [`TrainRecord`] lifts a raw record into named fields once, so nothing
//! downstream indexes by position.

mod raw;
mod train;

pub use raw::{DELIMITER, RawRecord, parse};
pub use train::{MalformedRecord, SeatAvailability, Seats, TrainRecord};

#[cfg(test)]
pub(crate) use train::fixtures;
