//! Malformed `.env` files report where they were found.
//!
//! Changes the working directory, so this file holds a single test and runs
//! in its own process.

use std::env;
use std::fs;

use supportflow_settings::{ConfigError, Environment, Settings};

#[test]
fn test_malformed_dotenv_reports_found_path() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    fs::write(root.join(".env"), "NOT A VALID LINE\n").unwrap();

    let nested = root.join("app");
    fs::create_dir_all(&nested).unwrap();
    env::set_current_dir(&nested).unwrap();

    match Settings::from_env_with(Environment::Test) {
        Err(ConfigError::EnvFile { path, .. }) => assert_eq!(path, root.join(".env")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed .env was accepted"),
    }
}
