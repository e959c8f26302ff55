//! Command implementations for the catastrophe clock CLI.
//!
//! Provides subcommands that estimate arrival dates from public data,
//! maintain the catalog file served as the listing endpoint, and show a
//! countdown in the terminal.

use cc_core::DEFAULT_CATASTROPHE;
use cc_forecast::sea_level::{GMSL_URL, MIAMI_ELEVATION_MM};
use clap::Subcommand;

pub mod catalog;
pub mod countdown;
pub mod dry_up;
pub mod records;
pub mod sea_level;

/// Catalog name for the reservoir estimate.
pub const CALIFORNIA_DRIES_UP: &str = DEFAULT_CATASTROPHE;
/// Catalog name for the sea level estimate.
pub const MIAMI_SINKS: &str = "Miami sinks";

#[derive(Subcommand)]
pub enum Command {
    /// Estimate when California's reservoirs run dry and record it
    DryUp {
        /// Catalog file to update (created if missing)
        #[arg(short = 'c', long)]
        catalog: String,

        /// First day of storage history to fit (YYYY-MM-DD)
        #[arg(long, default_value = "2012-01-01")]
        start_date: String,

        /// Station list CSV to use instead of the built-in one
        #[arg(long = "stations")]
        stations_csv: Option<String>,
    },

    /// Estimate when rising seas reach Miami and record it
    SeaLevel {
        /// Catalog file to update (created if missing)
        #[arg(short = 'c', long)]
        catalog: String,

        /// GMSL data file
        #[arg(long, default_value = GMSL_URL)]
        url: String,

        /// Elevation to be reached, in millimetres
        #[arg(long, default_value_t = MIAMI_ELEVATION_MM)]
        elevation_mm: f64,
    },

    /// Add a catastrophe, or replace the one with the same name
    Add {
        /// Catalog file to update (created if missing)
        #[arg(short = 'c', long)]
        catalog: String,

        #[arg(short = 'n', long)]
        name: String,

        /// ISO-8601 date or date-time
        #[arg(short = 'a', long)]
        arrival_date: String,

        #[arg(long, default_value = "")]
        description: String,

        /// HTML shown under "find out more"
        #[arg(long, default_value = "")]
        more_info: String,
    },

    /// List catastrophes with their current countdown
    List {
        #[arg(short = 'c', long)]
        catalog: String,
    },

    /// Count down to a catastrophe in the terminal
    Countdown {
        /// Catalog file to read
        #[arg(short = 'c', long, conflicts_with = "url", required_unless_present = "url")]
        catalog: Option<String>,

        /// Listing endpoint to fetch instead of a catalog file
        #[arg(short = 'u', long)]
        url: Option<String>,

        #[arg(short = 'n', long, default_value = DEFAULT_CATASTROPHE)]
        name: String,

        /// Stop after this many ticks (runs forever when omitted)
        #[arg(long)]
        ticks: Option<u64>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::DryUp {
            catalog,
            start_date,
            stations_csv,
        } => dry_up::run_dry_up(&catalog, &start_date, stations_csv.as_deref()).await,
        Command::SeaLevel {
            catalog,
            url,
            elevation_mm,
        } => sea_level::run_sea_level(&catalog, &url, elevation_mm).await,
        Command::Add {
            catalog,
            name,
            arrival_date,
            description,
            more_info,
        } => records::run_add(&catalog, &name, &arrival_date, &description, &more_info),
        Command::List { catalog } => records::run_list(&catalog),
        Command::Countdown {
            catalog,
            url,
            name,
            ticks,
        } => {
            let source = match (url, catalog) {
                (Some(url), _) => countdown::Source::Url(url),
                (None, Some(path)) => countdown::Source::Catalog(path),
                (None, None) => anyhow::bail!("one of --catalog or --url is required"),
            };
            countdown::run_countdown(source, &name, ticks).await
        }
    }
}
