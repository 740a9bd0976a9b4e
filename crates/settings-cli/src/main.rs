//! SupportFlow settings tool - Application entry point
//!
//! CLI-based entry point that dispatches to the settings commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings_cli::{
    cli::{Cli, Commands},
    commands,
    errors::CliResult,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // The template needs no settings at all
    if let Commands::Template = cli.command {
        return commands::template::execute();
    }

    let settings = commands::load_settings(cli.env_file.as_deref(), cli.environment)?;
    tracing::debug!("Settings loaded");

    match cli.command {
        Commands::Check => commands::check::execute(&settings),
        Commands::Show(args) => commands::show::execute(args, &settings),
        Commands::Get(args) => commands::get::execute(args, &settings),
        Commands::Template => commands::template::execute(),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
