//! Startup configuration from the process environment.
//!
//! Three values are required: the store URL, the store key, and the
//! realtime API key. Absence of any one is an immediate startup failure --
//! there is no default to fall back to for a credential.

use secrecy::SecretString;

use vitrine_types::error::ConfigError;

/// Table-store base URL.
pub const STORE_URL_VAR: &str = "VITRINE_STORE_URL";
/// Table-store API key.
pub const STORE_KEY_VAR: &str = "VITRINE_STORE_KEY";
/// Realtime pub/sub API key.
pub const REALTIME_KEY_VAR: &str = "VITRINE_REALTIME_KEY";

/// Connection and credential values for the two external services.
///
/// Keys are wrapped in [`SecretString`] so they never appear in Debug
/// output or logs.
pub struct AppConfig {
    pub store_url: String,
    pub store_key: SecretString,
    pub realtime_key: SecretString,
}

/// Load the configuration, failing fast on the first missing variable.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    Ok(AppConfig {
        store_url: require(STORE_URL_VAR)?,
        store_key: SecretString::from(require(STORE_KEY_VAR)?),
        realtime_key: SecretString::from(require(REALTIME_KEY_VAR)?),
    })
}

/// Read a required environment variable. Empty counts as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::MissingVar(name)),
        Err(std::env::VarError::NotPresent) => Err(ConfigError::MissingVar(name)),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidVar(name)),
    }
}
