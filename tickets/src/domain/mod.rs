//! Domain types for the ticket viewer.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod category;
mod date;
mod duration;
mod locale;
mod station;

pub use category::{FilterOptions, TrainCategory};
pub use date::{InvalidTravelDate, TravelDate};
pub use duration::{DurationError, TravelDuration, format_duration};
pub use locale::{DurationUnits, Locale};
pub use station::{InvalidStationCode, StationCode};
