//! CLI command implementations

use anyhow::{Context, Result};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::pipeline::SummaryPipeline;
use crate::server::{self, AppState};
use crate::transcript::{join_segments, TranscriptProvider, YouTubeTranscriptClient};

/// Run the HTTP service
pub async fn serve(mut settings: Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    // Fails fast when the Gemini credential is absent.
    let pipeline = SummaryPipeline::from_settings(&settings)?;

    let generation = pipeline.generation_config();
    tracing::info!(
        temperature = generation.temperature,
        top_p = generation.top_p,
        top_k = generation.top_k,
        max_output_tokens = generation.max_output_tokens,
        model = crate::llm::GEMINI_MODEL,
        "Summarization provider configured"
    );

    server::serve(&settings, AppState::new(pipeline)).await
}

/// Summarize one video and print the summary
pub async fn summarize_video(settings: &Settings, video_id: &str) -> Result<()> {
    let pipeline = SummaryPipeline::from_settings(settings)?;
    let summary = pipeline.run(video_id).await?;

    println!("{}", summary);
    Ok(())
}

/// Fetch a transcript and print it, reporting the detailed cause on failure
pub async fn print_transcript(settings: &Settings, video_id: &str) -> Result<()> {
    let client = YouTubeTranscriptClient::from_settings(settings)?;

    let segments = client
        .fetch_segments(video_id)
        .await
        .with_context(|| format!("Transcript not available for video {}", video_id))?;

    println!("{}", join_segments(&segments));
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            tracing::debug!(log_level = %settings.general.log_level, "Rendering configuration");
            let mut redacted = settings.clone();
            if !redacted.llm.api_key.is_empty() {
                redacted.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&redacted)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
