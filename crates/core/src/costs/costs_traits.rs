use async_trait::async_trait;
use rust_decimal::Decimal;

use super::costs_model::NormalizedCost;
use crate::subscriptions::Subscription;

/// Trait defining the contract for cost normalization operations.
#[async_trait]
pub trait CostServiceTrait: Send + Sync {
    fn home_currency(&self) -> &str;

    async fn amount_in_home_currency(&self, subscription: &Subscription) -> Decimal;
    async fn monthly_cost(&self, subscription: &Subscription) -> Decimal;
    async fn annual_cost(&self, subscription: &Subscription) -> Decimal;
    async fn normalize(&self, subscription: &Subscription) -> NormalizedCost;
}
