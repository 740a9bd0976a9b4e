//! Check command - Validate settings before a deployment.

use supportflow_settings::Settings;

use crate::errors::CliResult;

/// Execute the check command
pub fn execute(settings: &Settings) -> CliResult<()> {
    tracing::info!(
        environment = %settings.environment(),
        database = settings.master_db_name(),
        expire_minutes = settings.access_token_expire_minutes(),
        "Settings are valid"
    );
    println!("OK ({})", settings.environment());

    Ok(())
}
