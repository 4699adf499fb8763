//! Cost normalization service.
//!
//! Converts a subscription's raw amount into home currency, then applies
//! the recurrence table to produce monthly and annual figures. Conversion
//! never fails from the caller's point of view: when no rate is available
//! the raw amount is kept so the dashboard always has a number to show.

use std::sync::Arc;

use async_trait::async_trait;
use log::error;
use rust_decimal::Decimal;

use subfolio_rates::RateServiceTrait;

use crate::costs::{CostServiceTrait, NormalizedCost};
use crate::subscriptions::{Recurrence, Subscription};

/// Service for expressing subscription costs in the home currency.
pub struct CostService {
    rate_service: Arc<dyn RateServiceTrait>,
    home_currency: String,
}

impl CostService {
    pub fn new(rate_service: Arc<dyn RateServiceTrait>, home_currency: String) -> Self {
        Self {
            rate_service,
            home_currency,
        }
    }

    /// Converts the subscription's amount into home currency, keeping the
    /// raw amount when the rate lookup fails. Same-currency subscriptions
    /// never touch the rate service.
    async fn convert_or_keep(&self, subscription: &Subscription) -> Decimal {
        if subscription
            .currency
            .eq_ignore_ascii_case(&self.home_currency)
        {
            return subscription.amount;
        }

        match self
            .rate_service
            .get_rate(&subscription.currency, &self.home_currency)
            .await
        {
            Ok(rate) => subscription.amount * rate,
            Err(e) => {
                error!(
                    "Error converting {} to {} for '{}': {}. Using raw amount.",
                    subscription.currency, self.home_currency, subscription.name, e
                );
                subscription.amount
            }
        }
    }
}

#[async_trait]
impl CostServiceTrait for CostService {
    fn home_currency(&self) -> &str {
        &self.home_currency
    }

    async fn amount_in_home_currency(&self, subscription: &Subscription) -> Decimal {
        self.convert_or_keep(subscription).await
    }

    async fn monthly_cost(&self, subscription: &Subscription) -> Decimal {
        let amount = self.convert_or_keep(subscription).await;
        Recurrence::parse(&subscription.recurrence).monthly_amount(amount)
    }

    async fn annual_cost(&self, subscription: &Subscription) -> Decimal {
        let amount = self.convert_or_keep(subscription).await;
        Recurrence::parse(&subscription.recurrence).annual_amount(amount)
    }

    async fn normalize(&self, subscription: &Subscription) -> NormalizedCost {
        let amount = self.convert_or_keep(subscription).await;
        let recurrence = Recurrence::parse(&subscription.recurrence);
        NormalizedCost {
            monthly: recurrence.monthly_amount(amount),
            annual: recurrence.annual_amount(amount),
        }
    }
}
