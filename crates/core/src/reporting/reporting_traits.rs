use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::reporting_model::{DashboardSummary, ProjectionPoint, SubscriptionCost};
use crate::subscriptions::Subscription;

/// Trait defining the contract for dashboard reporting operations.
#[async_trait]
pub trait ReportingServiceTrait: Send + Sync {
    fn currency_distribution(&self, subscriptions: &[Subscription]) -> HashMap<String, Decimal>;

    async fn subscription_costs(&self, subscriptions: &[Subscription]) -> Vec<SubscriptionCost>;
    async fn twelve_month_projection(&self, subscriptions: &[Subscription])
        -> Vec<ProjectionPoint>;
    async fn dashboard_summary(&self, subscriptions: &[Subscription]) -> DashboardSummary;
}
