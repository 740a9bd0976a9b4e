//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module; they share the settings
//! loader below.

pub mod check;
pub mod get;
pub mod show;
pub mod template;

use std::path::Path;

use supportflow_settings::{
    ConfigResult, Environment, Layered, MapSource, ProcessEnv, Settings,
};

/// Load settings the way the backend would, honoring CLI overrides.
///
/// Without an env file this is [`Settings::from_env`] (or
/// [`Settings::from_env_with`] when the environment is given). With one, the file is
/// parsed without touching the process environment and layered under it.
pub fn load_settings(
    env_file: Option<&Path>,
    environment: Option<Environment>,
) -> ConfigResult<Settings> {
    match (env_file, environment) {
        (None, None) => Settings::from_env(),
        (None, Some(environment)) => Settings::from_env_with(environment),
        (Some(path), environment) => {
            let source = Layered::new(ProcessEnv, MapSource::from_env_file(path)?);
            match environment {
                Some(environment) => Settings::from_source_with(&source, environment),
                None => Settings::from_source(&source),
            }
        }
    }
}
