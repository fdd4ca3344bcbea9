//! Filtering query results by category and projecting them for display.

mod project;
mod row;

pub use project::{ProjectionError, project};
pub use row::{Cell, DisplayRow, Stops};
