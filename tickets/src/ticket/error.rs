//! Ticket query error types.

use std::fmt;

/// Errors from the ticket query client.
#[derive(Debug)]
pub enum TicketError {
    /// HTTP request failed (network error, timeout, TLS, ...)
    Http(reqwest::Error),

    /// Response body was not the expected JSON envelope
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// API answered but refused the query
    Rejected { message: String },

    /// Client configuration is unusable
    Config(String),
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketError::Http(e) => write!(f, "HTTP error: {e}"),
            TicketError::Json { message, body } => {
                write!(f, "unexpected ticket response: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TicketError::Api { status, message } => {
                write!(f, "ticket API error {status}: {message}")
            }
            TicketError::Rejected { message } => write!(f, "query rejected: {message}"),
            TicketError::Config(msg) => write!(f, "invalid client configuration: {msg}"),
        }
    }
}

impl std::error::Error for TicketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TicketError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TicketError {
    fn from(err: reqwest::Error) -> Self {
        TicketError::Http(err)
    }
}
