use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single fetched exchange rate.
///
/// Ephemeral: lives in the in-process cache until evicted or the process
/// exits, and is never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// The currency being converted from
    pub from_currency: String,

    /// The currency being converted to
    pub to_currency: String,

    /// Units of `to_currency` per unit of `from_currency`
    pub rate: Decimal,

    /// When the rate was fetched from the external source
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Create a rate stamped with the current time.
    pub fn new(from_currency: String, to_currency: String, rate: Decimal) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            fetched_at: Utc::now(),
        }
    }
}
