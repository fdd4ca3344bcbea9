//! 12306 left-ticket query client.
//!
//! The endpoint answers a GET with a JSON envelope whose `data.result` is a
//! list of pipe-delimited train lines. This module only retrieves those
//! lines; turning them into trains is the job of [`crate::record`].

mod client;
mod error;
mod types;

pub use client::{TicketClient, TicketClientConfig};
pub use error::TicketError;
pub use types::{QueryData, QueryResponse};
