//! Lineup CLI
//!
//! Command-line interface for the events browser:
//! - Browse events interactively
//! - List events
//! - Show a single event with attendance
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lineup::api::{ApiClient, ApiClientConfig};
use lineup::app::App;
use lineup::config::{self, Config, LoggingConfig};
use lineup::state::AppState;
use lineup::{attendance, view};

#[derive(Parser)]
#[command(name = "lineup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse events, guests, and RSVPs from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Events API base URL (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format for one-shot commands (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse events interactively (default)
    Browse,

    /// List all events
    List,

    /// Show a single event with its attendance
    Show {
        /// Event id
        id: i64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let client = build_client(&config, &cli.api_url)?;
            let state = AppState::new(config.api.on_fetch_error);
            App::new(client, state).run().await?;
        }

        Commands::List => {
            let client = build_client(&config, &cli.api_url)?;
            let events = client
                .fetch_events()
                .await
                .context("failed to fetch events")?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                print!("{}", view::render(&view::event_list(&events)));
            }
        }

        Commands::Show { id } => {
            let client = build_client(&config, &cli.api_url)?;
            let (event, guests, rsvps) = tokio::join!(
                client.fetch_event(id),
                client.fetch_guests(),
                client.fetch_rsvps(),
            );
            let event = event.with_context(|| format!("failed to fetch event {}", id))?;
            let guests = guests.context("failed to fetch guests")?;
            let rsvps = rsvps.context("failed to fetch RSVPs")?;

            let attending = attendance::resolve(Some(event.id), &guests, &rsvps);

            if cli.format == "json" {
                let body = serde_json::json!({
                    "event": event,
                    "attendance": attending,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!(
                    "{}",
                    view::render(&view::event_details(Some(&event), &attending))
                );
            }
        }

        Commands::Config { output } => {
            let content = config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn build_client(config: &Config, api_url: &Option<String>) -> anyhow::Result<ApiClient> {
    let api_config = ApiClientConfig {
        base_url: api_url
            .clone()
            .unwrap_or_else(|| config.api.base_url.clone()),
        cohort: config.api.cohort.clone(),
        request_timeout_ms: config.api.request_timeout_ms,
    };

    ApiClient::new(api_config).context("failed to build HTTP client")
}

fn init_logging(config: &LoggingConfig) {
    // Logs go to stderr so they never interleave with the rendered page
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("lineup={}", config.level)),
    );

    if config.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
