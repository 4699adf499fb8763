//! Subscriptions module - domain models and validation.

mod subscriptions_constants;
mod subscriptions_model;


// Re-export the public interface
pub use subscriptions_constants::*;
pub use subscriptions_model::{
    is_valid_currency_code, NewSubscription, Recurrence, Subscription, SubscriptionUpdate,
};
