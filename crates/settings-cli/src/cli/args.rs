//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use supportflow_settings::{Environment, SettingKey};

/// SupportFlow settings - validate and inspect deployment configuration
#[derive(Parser, Debug)]
#[command(name = "supportflow-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to read; process variables take precedence over it
    #[arg(long, global = true, env = "SUPPORTFLOW_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Runtime environment, overriding APP_ENV
    #[arg(long, global = true, value_parser = parse_environment)]
    pub environment: Option<Environment>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate settings
    Check,

    /// Print every setting with secrets redacted
    Show(ShowArgs),

    /// Print a single setting
    Get(GetArgs),

    /// Print a .env template covering every setting
    Template,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Variable name (e.g., "ACCESS_TOKEN_EXPIRE_MINUTES")
    #[arg(value_parser = parse_key)]
    pub key: SettingKey,

    /// Print secret values instead of redacting them
    #[arg(long)]
    pub reveal: bool,
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    value.parse().map_err(|e: supportflow_settings::ConfigError| e.to_string())
}

fn parse_key(value: &str) -> Result<SettingKey, String> {
    value.parse().map_err(|e: supportflow_settings::ConfigError| e.to_string())
}
