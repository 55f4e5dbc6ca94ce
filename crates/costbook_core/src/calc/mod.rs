//! Pure recipe calculators.
//!
//! # Responsibility
//! - Scale recipes to new batch sizes.
//! - Derive cost-plus price breakdowns from store costs.
//!
//! # Invariants
//! - Calculators never mutate store or model state.
//! - Unit mismatches are flagged, never converted.

pub mod price;
pub mod scale;

pub use price::{price, CostConfig, PriceBreakdown, RawCostConfig};
pub use scale::{scale, ScaledRecipe};
