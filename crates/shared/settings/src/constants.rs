//! Settings constants
//!
//! Variable names, defaults and validation limits in one place.

// =============================================================================
// Environment Variables
// =============================================================================

/// MongoDB connection string
pub const ENV_MONGO_URI: &str = "MONGO_URI";

/// Name of the master database
pub const ENV_MASTER_DB_NAME: &str = "MASTER_DB_NAME";

/// Collection holding admin accounts
pub const ENV_ADMIN_LIST: &str = "ADMIN_LIST";

/// Collection holding registered companies
pub const ENV_COMPANY_LIST: &str = "COMPANY_LIST";

/// Access token lifetime in minutes
pub const ENV_ACCESS_TOKEN_EXPIRE_MINUTES: &str = "ACCESS_TOKEN_EXPIRE_MINUTES";

/// HMAC secret for signing access tokens
pub const ENV_JWT_SECRET_KEY: &str = "JWT_SECRET_KEY";

/// Gemini API key
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Runtime environment selector
pub const ENV_APP_ENV: &str = "APP_ENV";

// =============================================================================
// Defaults
// =============================================================================

/// Default master database name
pub const DEFAULT_MASTER_DB_NAME: &str = "flipr-hackathon";

/// Default admin collection
pub const DEFAULT_ADMIN_LIST: &str = "admin_list";

/// Default company collection
pub const DEFAULT_COMPANY_LIST: &str = "company_list";

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;

// =============================================================================
// Validation
// =============================================================================

/// Minimum JWT secret length in bytes
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Accepted MongoDB connection string schemes
pub const MONGO_URI_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];

/// Replacement text for secrets in logs and summaries
pub const REDACTED: &str = "[REDACTED]";
