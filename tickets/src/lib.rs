//! Command-line train ticket viewer.
//!
//! Queries 12306 for trains between two stations on a date, keeps the
//! requested train categories and prints availability as a table.

pub mod cli;
pub mod domain;
pub mod query;
pub mod record;
pub mod stations;
pub mod table;
pub mod ticket;
pub mod trains;
