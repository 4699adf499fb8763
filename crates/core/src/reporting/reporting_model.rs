//! Reporting domain models for the dashboard.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the per-subscription cost list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCost {
    pub name: String,
    /// Monthly cost in home currency, rounded for display
    pub monthly_cost: Decimal,
}

/// One point of the twelve-month projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Month label in MM/YYYY form
    pub month: String,
    /// Projected total monthly cost in home currency
    pub total: Decimal,
}

/// Everything the dashboard needs in a single payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Home currency every monetary figure is expressed in
    pub currency: String,
    pub monthly_total: Decimal,
    pub annual_total: Decimal,
    pub subscription_costs: Vec<SubscriptionCost>,
    /// Raw amounts summed per billing currency, never converted
    pub currency_distribution: HashMap<String, Decimal>,
    pub projection: Vec<ProjectionPoint>,
}
