//! Costs module - currency conversion and recurrence normalization.

mod costs_model;
mod costs_service;
mod costs_traits;


// Re-export the public interface
pub use costs_model::NormalizedCost;
pub use costs_service::CostService;
pub use costs_traits::CostServiceTrait;
