//! Runtime settings sourced from the environment.

use std::env;
use std::fmt;

use crate::constants::DEFAULT_HOME_CURRENCY;
use crate::subscriptions::is_valid_currency_code;
use crate::{Error, Result};

/// Environment variable holding the exchangerate-api.com key.
pub const ENV_API_KEY: &str = "EXCHANGERATE_API_KEY";

/// Environment variable overriding the home currency.
pub const ENV_HOME_CURRENCY: &str = "SUBFOLIO_HOME_CURRENCY";

/// Placeholder value shipped in the example env file. Treated the same as
/// a missing key so a copy-pasted template fails at startup, not
/// mid-request.
const PLACEHOLDER_API_KEY: &str = "your-exchangerate-api-key-here";

/// Process-wide runtime configuration, resolved once at startup.
#[derive(Clone)]
pub struct Settings {
    /// Currency every normalized figure is expressed in
    pub home_currency: String,
    /// exchangerate-api.com access key
    pub api_key: String,
}

impl Settings {
    /// Builds settings from explicit values, validating both.
    pub fn new(api_key: &str, home_currency: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingConfigKey(ENV_API_KEY.to_string()));
        }
        if api_key == PLACEHOLDER_API_KEY {
            return Err(Error::InvalidConfigValue(format!(
                "{} still holds the placeholder value",
                ENV_API_KEY
            )));
        }

        let home_currency = home_currency.trim().to_uppercase();
        if !is_valid_currency_code(&home_currency) {
            return Err(Error::InvalidConfigValue(format!(
                "Invalid home currency code: {}",
                home_currency
            )));
        }

        Ok(Self {
            home_currency,
            api_key: api_key.to_string(),
        })
    }

    /// Reads settings from the environment.
    ///
    /// [`ENV_API_KEY`] is required; [`ENV_HOME_CURRENCY`] falls back to
    /// [`DEFAULT_HOME_CURRENCY`] when unset or blank.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::MissingConfigKey(ENV_API_KEY.to_string()))?;

        let home_currency = env::var(ENV_HOME_CURRENCY)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOME_CURRENCY.to_string());

        Self::new(&api_key, &home_currency)
    }
}

// The API key is a credential; Debug must never leak it into logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("home_currency", &self.home_currency)
            .field("api_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_values() {
        let settings = Settings::new("a1b2c3d4", "brl").unwrap();
        assert_eq!(settings.home_currency, "BRL");
        assert_eq!(settings.api_key, "a1b2c3d4");
    }

    #[test]
    fn test_new_rejects_missing_key() {
        assert!(Settings::new("", "BRL").is_err());
        assert!(Settings::new("   ", "BRL").is_err());
    }

    #[test]
    fn test_new_rejects_placeholder_key() {
        let result = Settings::new("your-exchangerate-api-key-here", "BRL");
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_new_rejects_bad_home_currency() {
        assert!(Settings::new("a1b2c3d4", "REAIS").is_err());
        assert!(Settings::new("a1b2c3d4", "").is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = Settings::new("super-secret-key", "BRL").unwrap();
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_from_env_requires_api_key() {
        // This test owns both variables; no other test touches the
        // process environment.
        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_HOME_CURRENCY);
        assert!(matches!(
            Settings::from_env(),
            Err(Error::MissingConfigKey(_))
        ));

        std::env::set_var(ENV_API_KEY, "a1b2c3d4");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.home_currency, DEFAULT_HOME_CURRENCY);

        std::env::set_var(ENV_HOME_CURRENCY, "eur");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.home_currency, "EUR");

        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_HOME_CURRENCY);
    }
}
