//! Clinic Map CLI
//!
//! Finds psychiatric clinics around a place and prints them as map markers.

#![allow(clippy::print_stdout)]

mod terminal_sink;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{ApplicationError, ClinicSearchService, LookupError, SearchOutcome};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, PlacesAdapter, StaticLocationProvider, init_logging};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::terminal_sink::{OutputMode, TerminalMapSink};

/// Clinic Map CLI
#[derive(Parser)]
#[command(name = "clinic-map")]
#[command(author, version, about = "Find psychiatric clinics near a place", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml if present)
    #[arg(short, long, env = "CLINICMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Print markers as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search clinics around a place
    ///
    /// Example: clinic-map search "Seoul Station"
    Search {
        /// Place name or address
        query: String,
    },

    /// Read one place per line from stdin; each line supersedes the previous search
    Interactive,
}

/// Filter override for the verbosity count; `None` keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Extra line printed under a failed search
const fn failure_hint(error: &ApplicationError) -> Option<&'static str> {
    match error.lookup() {
        Some(lookup) if lookup.is_transport() => {
            Some("Check the network connection and API key, then try again")
        },
        Some(LookupError::NotFound(_)) => Some("Try a more specific place name or address"),
        _ => None,
    }
}

/// Print how a search ended; pipeline failures are returned
fn report(
    query: &str,
    result: Result<SearchOutcome, ApplicationError>,
) -> Result<(), ApplicationError> {
    match result {
        Ok(SearchOutcome::Placed {
            placed, dropped, ..
        }) => {
            if dropped > 0 {
                println!("✅ {placed} clinics near '{query}' ({dropped} skipped without details)");
            } else {
                println!("✅ {placed} clinics near '{query}'");
            }
            Ok(())
        },
        Ok(SearchOutcome::Empty { .. }) => {
            println!("ℹ️  No clinics found near '{query}'");
            Ok(())
        },
        Ok(SearchOutcome::Superseded { generation }) => {
            debug!(%generation, %query, "Search superseded");
            Ok(())
        },
        Err(ApplicationError::EmptyQuery) => {
            println!("{}", ApplicationError::EmptyQuery);
            Ok(())
        },
        Err(e) => {
            println!("❌ {e}");
            if let Some(hint) = failure_hint(&e) {
                println!("   {hint}");
            }
            Err(e)
        },
    }
}

async fn run_search(service: &ClinicSearchService, query: &str) -> anyhow::Result<()> {
    report(query, service.search(query).await).context("Search failed")
}

async fn run_interactive(service: Arc<ClinicSearchService>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut searches = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let service = Arc::clone(&service);
        searches.spawn(async move {
            let result = service.search(&line).await;
            // failures are printed; the session keeps going
            let _ = report(line.trim(), result);
        });
    }

    while let Some(joined) = searches.join_next().await {
        joined.context("Search task panicked")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;
    config
        .validate()
        .map_err(ApplicationError::Configuration)
        .context("Invalid configuration")?;

    let places = Arc::new(PlacesAdapter::from_config(&config.places)?);
    let mode = if cli.json {
        OutputMode::JsonLines
    } else {
        OutputMode::Text
    };
    let sink = Arc::new(TerminalMapSink::new(mode));

    let service = Arc::new(
        ClinicSearchService::new(places.clone(), places.clone(), places, sink.clone())
            .with_settings(config.search.settings()),
    );

    let location = StaticLocationProvider::new(config.location.coordinate());
    service.center_on_last_known(&location).await;

    match cli.command {
        Commands::Search { query } => run_search(&service, &query).await?,
        Commands::Interactive => run_interactive(Arc::clone(&service)).await?,
    }

    info!(markers = sink.snapshot().markers.len(), "Done");
    Ok(())
}
