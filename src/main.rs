//! yt-summarizer - YouTube transcript summaries over HTTP
//!
//! Entry point for the yt-summarizer CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use yt_summarizer::cli::{Cli, Commands};
use yt_summarizer::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration only for runtime commands.
    let settings = match cli.command {
        Commands::Completions { .. } => None,
        _ => Some(Settings::load()?),
    };

    // Initialize logging
    let default_filter = settings
        .as_ref()
        .map(|s| s.log_filter(cli.wants_debug()))
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match (cli.command, settings) {
        (Commands::Completions { shell }, _) => {
            yt_summarizer::cli::completions::print(shell);
        }
        (Commands::Serve { host, port, .. }, Some(settings)) => {
            yt_summarizer::cli::commands::serve(settings, host, port).await?;
        }
        (Commands::Summarize { video_id }, Some(settings)) => {
            yt_summarizer::cli::commands::summarize_video(&settings, &video_id).await?;
        }
        (Commands::Transcript { video_id }, Some(settings)) => {
            yt_summarizer::cli::commands::print_transcript(&settings, &video_id).await?;
        }
        (Commands::Config(config_cmd), Some(settings)) => {
            yt_summarizer::cli::commands::config_command(&settings, config_cmd)?;
        }
        (_, None) => unreachable!(),
    }

    Ok(())
}
