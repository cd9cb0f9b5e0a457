use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use wordfreq::config::Config;
use wordfreq::pipeline::fetch::IssueFetcher;
use wordfreq::tracker::client::TrackerClient;

/// wordfreq: word frequency statistics across every issue in your tracker.
///
/// Counts the words in all issue summaries and descriptions, across all
/// projects, and ranks them by how often they occur.
#[derive(Parser)]
#[command(name = "wordfreq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the word frequency table
    Frequency {
        /// Number of words to show (default: 50)
        #[arg(long, default_value = "50")]
        top: usize,

        /// Print the full report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the projects the tracker reports
    Projects,

    /// Serve the word frequency endpoint over HTTP
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordfreq=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Frequency { top, json } => {
            let config = Config::load()?;
            config.require_tracker()?;
            let fetcher = build_fetcher(&config)?;

            if !json {
                println!("Counting words across all issues in {}...", config.tracker_url);
            }

            let report =
                wordfreq::pipeline::frequency::run(&fetcher, &config.service_identity()).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                wordfreq::output::terminal::display_frequency_report(&report, top);
            }
        }

        Commands::Projects => {
            let config = Config::load()?;
            config.require_tracker()?;
            let fetcher = build_fetcher(&config)?;

            let projects = fetcher.projects().await?;
            wordfreq::output::terminal::display_projects(&projects);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_tracker()?;
            let fetcher = build_fetcher(&config)?;

            info!(tracker = %config.tracker_url, "Starting web server");
            let state = wordfreq::web::AppState::new(fetcher, config.service_identity());
            wordfreq::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

/// Wire the tracker client in as both the project directory and the search backend.
fn build_fetcher(config: &Config) -> Result<IssueFetcher> {
    let client = Arc::new(
        TrackerClient::new(&config.tracker_url, config.service_identity())?
            .with_page_size(config.page_size),
    );
    info!(
        tracker = %config.tracker_url,
        user = %config.tracker_user,
        page_size = config.page_size,
        "Tracker client ready"
    );
    Ok(IssueFetcher::new(client.clone(), client))
}
