//! Show command - Print every setting with secrets redacted.

use std::io::Write;

use supportflow_settings::{SettingKey, Settings};

use crate::cli::args::ShowArgs;
use crate::errors::CliResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> CliResult<()> {
    let stdout = std::io::stdout();
    render(&args, settings, &mut stdout.lock())
}

/// Write the redacted settings to `out`.
pub fn render(args: &ShowArgs, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &settings.summary())?;
        writeln!(out)?;
        return Ok(());
    }

    let width = SettingKey::ALL
        .iter()
        .map(|key| key.env_var().len())
        .max()
        .unwrap_or(0);

    writeln!(out, "{:width$}  {}", "APP_ENV", settings.environment())?;
    for key in SettingKey::ALL {
        writeln!(out, "{:width$}  {}", key.env_var(), settings.display_value(key))?;
    }

    Ok(())
}
