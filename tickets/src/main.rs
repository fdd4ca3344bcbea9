use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tickets::cli::Args;
use tickets::query::{QueryError, TicketQuery, fetch_table};
use tickets::stations::{StationClient, StationLoader};
use tickets::ticket::TicketClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args).await {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "tickets=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> Result<String, QueryError> {
    let station_client = StationClient::new(args.station_config())?;
    let mut loader = StationLoader::new(station_client);
    if let Some(path) = &args.stations_file {
        loader = loader.with_file(path);
    }
    if let Some(cache) = args.station_cache() {
        loader = loader.with_cache(cache);
    }
    let directory = loader.load().await?;
    debug!(stations = directory.len(), "station directory ready");

    let query = TicketQuery::new(&args.from, &args.to, &args.date, &directory)?;
    let client = TicketClient::new(args.ticket_config())?;
    fetch_table(&client, query, &directory, &args.presentation()).await
}
