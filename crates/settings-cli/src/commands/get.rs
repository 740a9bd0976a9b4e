//! Get command - Print a single setting.

use supportflow_settings::Settings;

use crate::cli::args::GetArgs;
use crate::errors::CliResult;

/// Execute the get command
pub fn execute(args: GetArgs, settings: &Settings) -> CliResult<()> {
    if args.reveal && args.key.is_secret() {
        tracing::warn!(key = args.key.env_var(), "Revealing secret value");
    }
    println!("{}", lookup(&args, settings));

    Ok(())
}

/// Value printed for `args.key`; secrets stay redacted unless revealed.
pub fn lookup(args: &GetArgs, settings: &Settings) -> String {
    if args.reveal {
        settings.value(args.key).into_owned()
    } else {
        settings.display_value(args.key).into_owned()
    }
}
