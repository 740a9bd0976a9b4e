//! Process-wide settings for the SupportFlow backend.
//!
//! This crate provides:
//! - The immutable [`Settings`] record and its loader
//! - Environment sources (process env, `.env` files, in-memory maps)
//! - A single configuration error type
//!
//! Settings are built once at startup and passed to consumers explicitly:
//!
//! ```no_run
//! use std::sync::Arc;
//! use supportflow_settings::Settings;
//!
//! let settings = Arc::new(Settings::from_env().expect("invalid configuration"));
//! assert!(settings.access_token_expire_minutes() > 0);
//! ```

pub mod constants;
pub mod environment;
pub mod error;
pub mod keys;
pub mod secret;
pub mod settings;
pub mod source;

mod placeholder;

pub use environment::Environment;
pub use error::{ConfigError, ConfigResult};
pub use keys::SettingKey;
pub use secret::Secret;
pub use settings::{Settings, SettingsSummary};
pub use source::{EnvSource, Layered, MapSource, ProcessEnv};
