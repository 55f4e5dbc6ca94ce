//! Product (recipe) domain model.
//!
//! # Responsibility
//! - Represent a recipe: a batch size plus ordered ingredient usage.
//! - Keep usage entries as fixed-shape records, not open maps.
//!
//! # Invariants
//! - `quantity > 0`: scaling divides by it.
//! - Usage entries reference ingredients by name only; a dangling
//!   reference is legal and priced as zero cost.
//! - Entry order is preserved through scaling and persistence.

use crate::input::InvalidInput;
use serde::{Deserialize, Serialize};

/// Reference from a product to an ingredient by name, plus the amount
/// consumed. No ownership and no referential integrity is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsage {
    /// Ingredient name; may no longer exist in the store.
    pub name: String,
    /// Amount consumed per `Product::quantity` batch.
    pub quantity: f64,
    /// Open unit label, carried verbatim.
    pub unit: String,
}

/// A recipe: a target batch size plus ordered ingredient usage amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique key within the product document.
    pub name: String,
    /// Batch size the listed usage amounts correspond to. Always positive.
    pub quantity: f64,
    /// Open unit label for the batch size.
    pub unit: String,
    /// Ordered usage entries. Non-empty is enforced by the service
    /// boundary at creation time, not by this record.
    #[serde(default)]
    pub ingredients: Vec<IngredientUsage>,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            ingredients: Vec::new(),
        }
    }

    /// Appends a usage entry, preserving insertion order.
    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) {
        self.ingredients.push(IngredientUsage {
            name: name.into(),
            quantity,
            unit: unit.into(),
        });
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
        for usage in &self.ingredients {
            if usage.name.trim().is_empty() {
                return Err(InvalidInput::new(
                    "ingredients",
                    "every usage entry needs a non-empty ingredient name",
                ));
            }
            if !usage.quantity.is_finite() || usage.quantity <= 0.0 {
                return Err(InvalidInput::new(
                    "ingredients",
                    format!(
                        "usage entry `{}` needs a quantity greater than zero, got `{}`",
                        usage.name, usage.quantity
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Product;

    fn bread() -> Product {
        let mut bread = Product::new("Bread", 500.0, "grams");
        bread.add_ingredient("Flour", 300.0, "grams");
        bread
    }

    #[test]
    fn add_ingredient_preserves_order() {
        let mut cake = Product::new("Cake", 1000.0, "grams");
        cake.add_ingredient("Flour", 400.0, "grams");
        cake.add_ingredient("Sugar", 200.0, "grams");
        cake.add_ingredient("Eggs", 4.0, "pieces");
        let names: Vec<&str> = cake.ingredients.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Flour", "Sugar", "Eggs"]);
    }

    #[test]
    fn validate_accepts_a_well_formed_recipe() {
        assert!(bread().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_usage_entries() {
        let mut product = bread();
        product.ingredients[0].quantity = 0.0;
        let err = product.validate().unwrap_err();
        assert_eq!(err.field, "ingredients");
        assert!(err.reason.contains("Flour"));
    }

    #[test]
    fn missing_ingredients_field_deserializes_as_empty() {
        let parsed: Product =
            serde_json::from_str(r#"{"name":"Bread","quantity":500.0,"unit":"grams"}"#).unwrap();
        assert!(parsed.ingredients.is_empty());
    }
}
