//! Template command - Print a `.env` template.

use std::io::Write;

use supportflow_settings::constants::ENV_APP_ENV;
use supportflow_settings::SettingKey;

use crate::errors::CliResult;

/// Execute the template command
pub fn execute() -> CliResult<()> {
    let stdout = std::io::stdout();
    render(&mut stdout.lock())
}

/// Write a template listing every variable. Required settings are left
/// blank so the backend refuses to start until they are filled in.
pub fn render(out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "# development | test | production")?;
    writeln!(out, "{}=development", ENV_APP_ENV)?;

    for key in SettingKey::ALL {
        writeln!(out)?;
        if key.is_required() {
            writeln!(out, "# required")?;
        }
        let default = key.default_value().unwrap_or_default();
        writeln!(out, "{}={}", key.env_var(), default)?;
    }

    Ok(())
}
