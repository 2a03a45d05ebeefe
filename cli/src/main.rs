mod loader;
mod logging;
mod table;
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use planfact_core::{
    current_month, current_year, load_settings, DashboardService, FilePayloadSource,
    HttpPayloadSource, Month, Settings, VisibleWindow,
};
use tracing::info;

use crate::loader::{DynSource, Loader};

#[derive(Parser)]
#[command(name = "planfact")]
#[command(about = "Monthly plan vs. fact dashboard for managers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Endpoint serving the dashboard JSON (overrides config)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Read the payload from a local JSON file instead of the endpoint
    #[arg(long, global = true, conflicts_with = "endpoint")]
    file: Option<PathBuf>,

    /// Skip fetching and show generated data
    #[arg(long, global = true)]
    mock: bool,

    /// Path to a planfact.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Print the six-month window once
    Table {
        /// First month of the window (name, abbreviation or 1-12)
        #[arg(long)]
        start: Option<Month>,
    },
    /// Print the transformed dashboard data as JSON
    Json,
}

fn build_loader(cli: &Cli, settings: &Settings) -> Result<Loader> {
    if cli.mock {
        return Ok(Loader::MockOnly);
    }

    let source: DynSource = match &cli.file {
        Some(path) => Box::new(FilePayloadSource::new(path.clone())),
        None => {
            let endpoint = cli.endpoint.clone().unwrap_or_else(|| settings.endpoint.clone());
            Box::new(
                HttpPayloadSource::new(endpoint, settings.timeout())
                    .context("failed to build HTTP client")?,
            )
        }
    };

    let service = DashboardService::new(source).with_strict_months(settings.strict_months);
    Ok(Loader::Service(service))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match &cli.command {
        Some(Commands::Tui) | None => match settings.log_path() {
            Some(path) => logging::init_file(&path)?,
            None => logging::init_stderr(),
        },
        _ => logging::init_stderr(),
    }

    let loader = build_loader(&cli, &settings)?;
    let year = current_year();

    match cli.command {
        Some(Commands::Table { start }) => {
            let outcome = loader.load(year);
            let window = VisibleWindow::initialize(start.unwrap_or_else(current_month));
            table::show_table(&outcome.view, &window, outcome.origin);
        }
        Some(Commands::Json) => {
            let outcome = loader.load(year);
            println!("{}", serde_json::to_string_pretty(outcome.view.as_ref())?);
        }
        Some(Commands::Tui) | None => {
            info!("starting dashboard");
            tui::run(Arc::new(loader), current_month(), year)?;
        }
    }
    Ok(())
}
