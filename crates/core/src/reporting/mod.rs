//! Reporting module - dashboard aggregates over subscriptions.

mod reporting_model;
mod reporting_service;
mod reporting_traits;


// Re-export the public interface
pub use reporting_model::{DashboardSummary, ProjectionPoint, SubscriptionCost};
pub use reporting_service::ReportingService;
pub use reporting_traits::ReportingServiceTrait;
