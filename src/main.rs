use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shipsearch::catalog::{Catalog, ShipRecord};
use shipsearch::output;
use shipsearch::query::{parse_query, SearchFilters};
use shipsearch::utils::{get_config_path, AppConfig};
use std::io::Write;
use std::path::PathBuf;
use termcolor::ColorChoice;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "SHIPSEARCH_LOG";

#[derive(Parser)]
#[command(name = "shipsearch")]
#[command(about = "Search a ship catalog with free-text queries like \"high tier battleships\"")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search query (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Catalog JSON file to search
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filters a query is interpreted as
    Parse {
        /// Query text
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Search the catalog
    Search {
        /// Query text
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,

        /// Catalog JSON file (defaults to catalog_path in config.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print filters and matches as JSON
        #[arg(long)]
        json: bool,

        /// Maximum ships to print (0 = all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },
    /// List the nations, tiers and types present in the catalog
    Facets {
        /// Catalog JSON file (defaults to catalog_path in config.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    /// Follow config.json and the terminal
    Auto,
    Always,
    Never,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    filters: &'a SearchFilters,
    matched: usize,
    ships: &'a [&'a ShipRecord],
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { query }) => {
            let filters = parse_query(&query.join(" "));
            println!("{}", serde_json::to_string_pretty(&filters)?);
        }
        Some(Commands::Search {
            query,
            catalog,
            json,
            limit,
            color,
        }) => {
            let config = load_config();
            run_search(&query.join(" "), catalog, json, limit, color, &config)?;
        }
        Some(Commands::Facets { catalog }) => {
            let config = load_config();
            let catalog = Catalog::load(&config.resolve_catalog(catalog)?)?;
            let mut out = output::stdout(ColorChoice::Auto, config.color);
            output::print_facets(&mut out, &catalog.facets())?;
        }
        Some(Commands::Config { path }) => {
            let config_path = get_config_path()?;
            if path {
                println!("{}", config_path.display());
            } else {
                let config = AppConfig::load_from(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
        None => {
            if cli.query.is_empty() {
                use clap::CommandFactory;
                Cli::command().print_help()?;
            } else {
                let config = load_config();
                run_search(
                    &cli.query.join(" "),
                    cli.catalog,
                    false,
                    None,
                    ColorWhen::Auto,
                    &config,
                )?;
            }
        }
    }

    Ok(())
}

/// Log to stderr so stdout only carries results
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load config.json, falling back to defaults when it cannot be read
fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        warn!("ignoring config: {:#}", e);
        AppConfig::default()
    })
}

fn run_search(
    query: &str,
    catalog: Option<PathBuf>,
    json: bool,
    limit: Option<usize>,
    color: ColorWhen,
    config: &AppConfig,
) -> Result<()> {
    let catalog_path = config.resolve_catalog(catalog)?;
    let catalog = Catalog::load(&catalog_path)?;

    let filters = parse_query(query);
    let matches = catalog.narrow(&filters);
    let shown = match config.effective_limit(limit) {
        Some(n) => &matches[..n.min(matches.len())],
        None => &matches[..],
    };

    if json {
        let result = SearchOutput {
            filters: &filters,
            matched: matches.len(),
            ships: shown,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let choice = match color {
        ColorWhen::Auto => ColorChoice::Auto,
        ColorWhen::Always => ColorChoice::Always,
        ColorWhen::Never => ColorChoice::Never,
    };
    let mut out = output::stdout(choice, config.color);
    output::print_filters(&mut out, &filters)?;
    output::print_ships(&mut out, shown)?;
    output::print_summary(&mut out, shown.len(), matches.len())?;
    out.flush().context("Failed to write results")?;

    Ok(())
}
