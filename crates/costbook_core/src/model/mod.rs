//! Domain models for recipe costing.
//!
//! # Responsibility
//! - Define the canonical ingredient and product records.
//! - Keep record invariants checkable before persistence.
//!
//! # Invariants
//! - Records are keyed by `name`; keys are unique within a document.
//! - `quantity` is always positive (pricing divides by it).
//! - Units are open strings; no conversion table exists anywhere.

pub mod ingredient;
pub mod product;

pub use ingredient::Ingredient;
pub use product::{IngredientUsage, Product};
