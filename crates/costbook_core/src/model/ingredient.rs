//! Ingredient domain model.
//!
//! # Responsibility
//! - Represent a raw material with a cost anchored to a quantity/unit.
//!
//! # Invariants
//! - `quantity > 0`: the unit cost is `cost / quantity`.
//! - `cost >= 0`.

use crate::input::InvalidInput;
use serde::{Deserialize, Serialize};

/// Raw material with a cost anchored to a specific quantity and unit.
///
/// `cost` is the total price paid for `quantity` of `unit`, not a
/// per-unit price. The per-unit price is derived via [`Ingredient::unit_cost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique key within the ingredient document.
    pub name: String,
    /// Amount that `cost` pays for. Always positive.
    pub quantity: f64,
    /// Open unit label: "grams", "milliliters", "pieces", or any string.
    pub unit: String,
    /// Total cost for `quantity` units. Never negative.
    pub cost: f64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            cost,
        }
    }

    /// Cost of a single `unit` of this ingredient.
    pub fn unit_cost(&self) -> f64 {
        self.cost / self.quantity
    }

    /// Validates record invariants. Called by the store before any write.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.name.trim().is_empty() {
            return Err(InvalidInput::new("name", "a non-empty name is required"));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(InvalidInput::new(
                "quantity",
                format!("expected a number greater than zero, got `{}`", self.quantity),
            ));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(InvalidInput::new(
                "cost",
                format!("expected a non-negative number, got `{}`", self.cost),
            ));
        }
        Ok(())
    }
}
