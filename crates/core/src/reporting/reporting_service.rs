//! Dashboard reporting service.
//!
//! Read-only aggregates over a slice of subscriptions. Conversion and
//! normalization delegate to the cost service; figures are rounded here,
//! at the display edge, and nowhere earlier.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, PROJECTION_MONTHS};
use crate::costs::CostServiceTrait;
use crate::reporting::{
    DashboardSummary, ProjectionPoint, ReportingServiceTrait, SubscriptionCost,
};
use crate::subscriptions::Subscription;

/// Service assembling the dashboard aggregates.
pub struct ReportingService {
    cost_service: Arc<dyn CostServiceTrait>,
}

impl ReportingService {
    pub fn new(cost_service: Arc<dyn CostServiceTrait>) -> Self {
        Self { cost_service }
    }

    /// Projection anchored at an explicit start date. The dashboard trait
    /// method anchors at the current month; hosts can anchor elsewhere.
    pub async fn projection_starting(
        &self,
        subscriptions: &[Subscription],
        start: NaiveDate,
    ) -> Vec<ProjectionPoint> {
        let mut total = Decimal::ZERO;
        for subscription in subscriptions {
            total += self.cost_service.monthly_cost(subscription).await;
        }
        build_projection(start, total.round_dp(DISPLAY_DECIMAL_PRECISION))
    }
}

#[async_trait]
impl ReportingServiceTrait for ReportingService {
    fn currency_distribution(&self, subscriptions: &[Subscription]) -> HashMap<String, Decimal> {
        let mut distribution: HashMap<String, Decimal> = HashMap::new();
        for subscription in subscriptions {
            *distribution
                .entry(subscription.currency.to_uppercase())
                .or_insert(Decimal::ZERO) += subscription.amount;
        }
        distribution
    }

    async fn subscription_costs(&self, subscriptions: &[Subscription]) -> Vec<SubscriptionCost> {
        let mut costs = Vec::with_capacity(subscriptions.len());
        for subscription in subscriptions {
            let monthly = self.cost_service.monthly_cost(subscription).await;
            costs.push(SubscriptionCost {
                name: subscription.name.clone(),
                monthly_cost: monthly.round_dp(DISPLAY_DECIMAL_PRECISION),
            });
        }
        costs
    }

    async fn twelve_month_projection(
        &self,
        subscriptions: &[Subscription],
    ) -> Vec<ProjectionPoint> {
        self.projection_starting(subscriptions, Utc::now().date_naive())
            .await
    }

    async fn dashboard_summary(&self, subscriptions: &[Subscription]) -> DashboardSummary {
        let mut monthly_total = Decimal::ZERO;
        let mut annual_total = Decimal::ZERO;
        let mut subscription_costs = Vec::with_capacity(subscriptions.len());

        for subscription in subscriptions {
            let normalized = self.cost_service.normalize(subscription).await;
            monthly_total += normalized.monthly;
            annual_total += normalized.annual;
            subscription_costs.push(SubscriptionCost {
                name: subscription.name.clone(),
                monthly_cost: normalized.monthly.round_dp(DISPLAY_DECIMAL_PRECISION),
            });
        }

        let monthly_total = monthly_total.round_dp(DISPLAY_DECIMAL_PRECISION);
        DashboardSummary {
            currency: self.cost_service.home_currency().to_string(),
            monthly_total,
            annual_total: annual_total.round_dp(DISPLAY_DECIMAL_PRECISION),
            subscription_costs,
            currency_distribution: self.currency_distribution(subscriptions),
            projection: build_projection(Utc::now().date_naive(), monthly_total),
        }
    }
}

/// Builds the flat projection: `total` repeated for the next
/// `PROJECTION_MONTHS` months with MM/YYYY labels.
fn build_projection(start: NaiveDate, total: Decimal) -> Vec<ProjectionPoint> {
    let first = start.with_day(1).unwrap_or(start);
    (0..PROJECTION_MONTHS)
        .map(|offset| {
            let month = first
                .checked_add_months(Months::new(offset))
                .unwrap_or(first);
            ProjectionPoint {
                month: month.format("%m/%Y").to_string(),
                total,
            }
        })
        .collect()
}
