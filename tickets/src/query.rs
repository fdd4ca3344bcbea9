//! End-to-end ticket query: validate, fetch, parse, filter, render.

use tracing::info;

use crate::domain::{FilterOptions, InvalidTravelDate, Locale, StationCode, TravelDate};
use crate::record::parse;
use crate::stations::{StationDirectory, StationError};
use crate::table::{TableStyle, render};
use crate::ticket::{TicketClient, TicketError};
use crate::trains::{DisplayRow, ProjectionError, project};

/// Anything that can stop a query from producing a table.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A place name typed by the user has no telecode.
    #[error("unknown station: {0}")]
    UnknownStation(String),

    #[error(transparent)]
    InvalidDate(#[from] InvalidTravelDate),

    #[error("failed to load stations")]
    Stations(#[from] StationError),

    #[error("failed to fetch tickets")]
    Ticket(#[from] TicketError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// A validated query: both stations are known and the date is real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuery {
    pub from: StationCode,
    pub to: StationCode,
    pub date: TravelDate,
}

impl TicketQuery {
    /// Resolve place names and parse the date.
    ///
    /// Fails before any request is built if either name is unknown or the
    /// date is malformed.
    pub fn new(
        from: &str,
        to: &str,
        date: &str,
        directory: &StationDirectory,
    ) -> Result<Self, QueryError> {
        let resolve = |name: &str| {
            directory
                .code_of(name)
                .ok_or_else(|| QueryError::UnknownStation(name.to_string()))
        };

        Ok(Self {
            from: resolve(from)?,
            to: resolve(to)?,
            date: TravelDate::parse(date)?,
        })
    }
}

/// What to show and how.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    pub filter: FilterOptions,
    pub locale: Locale,
    pub style: TableStyle,
}

/// Turn raw result lines into a rendered table.
///
/// Every row is projected before anything is rendered, so a bad record
/// fails the whole table rather than truncating it.
pub fn build_table(
    lines: &[String],
    directory: &StationDirectory,
    presentation: &Presentation,
) -> Result<String, QueryError> {
    let records = parse(lines);
    let rows: Vec<DisplayRow> = project(
        &records,
        directory,
        &presentation.filter,
        presentation.locale,
    )
    .collect::<Result<_, _>>()?;

    info!(
        received = records.len(),
        shown = rows.len(),
        "filtered trains"
    );
    Ok(render(&rows, presentation.locale, presentation.style))
}

/// Run a query against the API and render the result.
pub async fn fetch_table(
    client: &TicketClient,
    query: TicketQuery,
    directory: &StationDirectory,
    presentation: &Presentation,
) -> Result<String, QueryError> {
    let lines = client.query(query.date, query.from, query.to).await?;
    build_table(&lines, directory, presentation)
}
