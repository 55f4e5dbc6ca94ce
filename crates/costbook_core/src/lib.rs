//! Core domain logic for CostBook, a desktop recipe-costing tool.
//! This crate is the single source of truth for business invariants.

pub mod calc;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calc::price::{price, CostConfig, PriceBreakdown, RawCostConfig};
pub use calc::scale::{scale, ScaledRecipe};
pub use input::InvalidInput;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ingredient::Ingredient;
pub use model::product::{IngredientUsage, Product};
pub use service::recipe_service::{RecipeService, ServiceError, ServiceResult, UsageInput};
pub use store::{DocumentKind, Store, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
