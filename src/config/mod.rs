//! Configuration module for yt-summarizer
//!
//! Handles loading settings from a TOML file with environment overrides.

mod settings;

pub use settings::Settings;
