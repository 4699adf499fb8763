//! Subfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Subfolio: turning
//! arbitrary-currency, arbitrary-recurrence subscriptions into comparable
//! home-currency figures and dashboard aggregates. Rate fetching and
//! caching live in the `subfolio-rates` crate; persistence and
//! presentation belong to the host application.

pub mod constants;
pub mod costs;
pub mod errors;
pub mod reporting;
pub mod settings;
pub mod subscriptions;

// Re-export common types from the costs and reporting modules
pub use costs::*;
pub use reporting::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
