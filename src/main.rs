use anyhow::Result;
use clap::{Parser, Subcommand};
use scholar_search::config::{find_config_file, load_config, Config};
use scholar_search::models::SearchParams;
use scholar_search::pipeline::run_search;
use scholar_search::provider::ScholarProvider;
use scholar_search::ui::{print_outcome, OutputFormat};
use scholar_search::web;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scholar Search - find academic publications by keyword and year range
#[derive(Parser, Debug)]
#[command(name = "scholar-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search academic publications by keyword and year range", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive web interface
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Run a one-shot search from the terminal
    #[command(alias = "s")]
    Search {
        /// Search query string
        query: String,

        /// Maximum number of results (1-100)
        #[arg(long, short)]
        limit: Option<usize>,

        /// Earliest publication year to accept
        #[arg(long)]
        year_start: Option<i32>,

        /// Latest publication year to accept
        #[arg(long)]
        year_end: Option<i32>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Auto)]
        output: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("scholar_search={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let provider = build_provider(&config);

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut server_config = config.clone();
            if let Some(host) = host {
                server_config.server.host = host;
            }
            if let Some(port) = port {
                server_config.server.port = port;
            }
            web::start_web_server(Arc::new(provider), &server_config).await?;
        }

        Some(Commands::Search {
            query,
            limit,
            year_start,
            year_end,
            output,
        }) => {
            let defaults = &config.search;
            let params = SearchParams::new(query)
                .limit(limit.unwrap_or(defaults.default_limit))
                .year_range(
                    year_start.unwrap_or(defaults.default_year_start),
                    year_end.unwrap_or(defaults.default_year_end),
                );

            let outcome = run_search(&provider, &params, config.provider.page_size).await?;
            print_outcome(&outcome, output);
        }

        None => {
            println!("No command provided. Use --help for usage information.");
            println!("Common commands:");
            println!("  serve            - Start the web interface");
            println!("  search <query>   - Run a one-shot search");
        }
    }

    Ok(())
}

fn build_provider(config: &Config) -> ScholarProvider {
    let mut provider = ScholarProvider::with_base_url(config.provider.base_url.clone());
    if let Some(key) = &config.provider.api_key {
        provider = provider.with_api_key(key);
    }
    provider
}
