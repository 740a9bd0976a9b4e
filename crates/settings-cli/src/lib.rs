//! Operator CLI for SupportFlow settings.
//!
//! Validates and inspects the settings a deployment would start with,
//! without starting anything:
//! - `check` - load and validate
//! - `show` - print every setting, secrets redacted
//! - `get` - print a single setting
//! - `template` - print a `.env` template

pub mod cli;
pub mod commands;
pub mod errors;
