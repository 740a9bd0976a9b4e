//! Setting names and their metadata.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::ConfigError;

/// One entry of the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    MongoUri,
    MasterDbName,
    AdminList,
    CompanyList,
    AccessTokenExpireMinutes,
    JwtSecretKey,
    GeminiApiKey,
}

impl SettingKey {
    /// All settings in display order.
    pub const ALL: [SettingKey; 7] = [
        SettingKey::MongoUri,
        SettingKey::MasterDbName,
        SettingKey::AdminList,
        SettingKey::CompanyList,
        SettingKey::AccessTokenExpireMinutes,
        SettingKey::JwtSecretKey,
        SettingKey::GeminiApiKey,
    ];

    /// Environment variable the setting is read from.
    pub fn env_var(&self) -> &'static str {
        match self {
            SettingKey::MongoUri => ENV_MONGO_URI,
            SettingKey::MasterDbName => ENV_MASTER_DB_NAME,
            SettingKey::AdminList => ENV_ADMIN_LIST,
            SettingKey::CompanyList => ENV_COMPANY_LIST,
            SettingKey::AccessTokenExpireMinutes => ENV_ACCESS_TOKEN_EXPIRE_MINUTES,
            SettingKey::JwtSecretKey => ENV_JWT_SECRET_KEY,
            SettingKey::GeminiApiKey => ENV_GEMINI_API_KEY,
        }
    }

    /// Secrets are redacted everywhere except through explicit accessors.
    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            SettingKey::MongoUri | SettingKey::JwtSecretKey | SettingKey::GeminiApiKey
        )
    }

    /// Required settings have no default.
    pub fn is_required(&self) -> bool {
        self.default_value().is_none()
    }

    pub fn default_value(&self) -> Option<String> {
        match self {
            SettingKey::MasterDbName => Some(DEFAULT_MASTER_DB_NAME.to_string()),
            SettingKey::AdminList => Some(DEFAULT_ADMIN_LIST.to_string()),
            SettingKey::CompanyList => Some(DEFAULT_COMPANY_LIST.to_string()),
            SettingKey::AccessTokenExpireMinutes => {
                Some(DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES.to_string())
            }
            SettingKey::MongoUri | SettingKey::JwtSecretKey | SettingKey::GeminiApiKey => None,
        }
    }
}

impl FromStr for SettingKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SettingKey::ALL
            .into_iter()
            .find(|key| key.env_var().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}
