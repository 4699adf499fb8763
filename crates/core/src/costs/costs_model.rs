//! Cost domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recurrence-independent cost figures in home currency.
///
/// Derived on every read from the raw amount and the current exchange
/// rate; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCost {
    /// Cost per month in home currency
    pub monthly: Decimal,
    /// Cost per year in home currency
    pub annual: Decimal,
}
