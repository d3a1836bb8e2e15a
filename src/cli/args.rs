//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// yt-summarizer - Summarize YouTube videos from their transcripts
#[derive(Parser, Debug)]
#[command(name = "yt-summarizer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP summarize service
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Run in debug mode (verbose request logging)
        #[arg(long)]
        debug: bool,
    },

    /// Summarize a single video and print the result
    Summarize {
        /// YouTube video ID
        video_id: String,
    },

    /// Fetch and print a video's transcript
    Transcript {
        /// YouTube video ID
        video_id: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Whether debug-level logging was requested.
    pub fn wants_debug(&self) -> bool {
        self.verbose || matches!(self.command, Commands::Serve { debug: true, .. })
    }
}
