//! exchangerate-api.com provider for pairwise currency rates.
//!
//! Uses the v6 pair endpoint: `GET {base_url}/{api_key}/pair/{from}/{to}`.
//! Every response carries a `result` flag and, on success, a numeric
//! `conversion_rate`. One rate per request; the crate-level cache keeps
//! request volume bounded.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RateError;
use crate::models::ExchangeRate;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Base URL of the v6 API
const BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Default HTTP request timeout. A hung lookup must not stall the
/// caller's request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// API response from the v6 pair endpoint.
#[derive(Debug, Deserialize)]
struct PairResponse {
    /// "success" or "error"
    result: String,
    /// Units of target currency per unit of base currency
    conversion_rate: Option<f64>,
    /// Error code reported on failure (e.g. "unsupported-code")
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

/// exchangerate-api.com v6 provider.
///
/// # Example
///
/// ```ignore
/// use subfolio_rates::provider::exchange_rate_api::ExchangeRateApiProvider;
///
/// let provider = ExchangeRateApiProvider::new("your_api_key".to_string());
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExchangeRateApiProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Create a provider pointed at a custom base URL (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Build the pair-endpoint URL. The URL embeds the API key, so it must
    /// be redacted before logging.
    fn pair_url(&self, from: &str, to: &str) -> String {
        format!("{}/{}/pair/{}/{}", self.base_url, self.api_key, from, to)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRate, RateError> {
        let from = from_currency.trim().to_uppercase();
        let to = to_currency.trim().to_uppercase();
        let url = self.pair_url(&from, &to);

        log::debug!(
            "Exchange rate request: {}",
            url.replace(&self.api_key, "***")
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RateError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                RateError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body: PairResponse = response.json().await?;

        if body.result != "success" {
            return Err(RateError::ApiError {
                error_type: body
                    .error_type
                    .unwrap_or_else(|| "unknown-error".to_string()),
            });
        }

        let raw_rate = body.conversion_rate.ok_or_else(|| RateError::InvalidRate {
            message: "conversion_rate is missing".to_string(),
        })?;

        if raw_rate <= 0.0 {
            return Err(RateError::InvalidRate {
                message: format!("conversion_rate must be positive, got {}", raw_rate),
            });
        }

        let rate = Decimal::try_from(raw_rate).map_err(|_| RateError::InvalidRate {
            message: format!("conversion_rate {} is not a valid decimal", raw_rate),
        })?;

        Ok(ExchangeRate::new(from, to, rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = ExchangeRateApiProvider::new("test_key".to_string());
        assert_eq!(provider.id(), "EXCHANGE_RATE_API");
    }

    #[test]
    fn test_pair_url_format() {
        let provider = ExchangeRateApiProvider::with_base_url(
            "test_key".to_string(),
            "https://example.test/v6".to_string(),
        );
        assert_eq!(
            provider.pair_url("USD", "BRL"),
            "https://example.test/v6/test_key/pair/USD/BRL"
        );
    }

    #[test]
    fn test_parse_success_response() {
        let body: PairResponse = serde_json::from_str(
            r#"{"result":"success","base_code":"USD","target_code":"BRL","conversion_rate":5.4301}"#,
        )
        .unwrap();
        assert_eq!(body.result, "success");
        assert_eq!(body.conversion_rate, Some(5.4301));
        assert!(body.error_type.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let body: PairResponse =
            serde_json::from_str(r#"{"result":"error","error-type":"unsupported-code"}"#).unwrap();
        assert_eq!(body.result, "error");
        assert!(body.conversion_rate.is_none());
        assert_eq!(body.error_type.as_deref(), Some("unsupported-code"));
    }
}
