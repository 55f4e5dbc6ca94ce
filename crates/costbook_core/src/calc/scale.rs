//! Recipe scaling calculator.
//!
//! # Responsibility
//! - Scale a product's ingredient amounts to a new batch size.
//! - Flag target/batch unit mismatches without converting.
//!
//! # Invariants
//! - Entry order, names and units are preserved exactly.
//! - The input product is never mutated; the store is never touched.

use crate::input::InvalidInput;
use crate::model::{IngredientUsage, Product};

/// Result of scaling a product to a target batch size.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledRecipe {
    /// Target batch size the scaled amounts correspond to.
    pub target_quantity: f64,
    /// Target batch unit as given by the caller.
    pub target_unit: String,
    /// Scaled usage entries in original order.
    pub ingredients: Vec<IngredientUsage>,
    /// True when the target unit differs from the product's unit
    /// (case-sensitive). Advisory only; no conversion is applied.
    pub unit_mismatch: bool,
}

impl ScaledRecipe {
    /// Builds a persistable product from this scaled result, so the
    /// caller can store the derived recipe under a new name.
    pub fn into_product(self, name: impl Into<String>) -> Product {
        Product {
            name: name.into(),
            quantity: self.target_quantity,
            unit: self.target_unit,
            ingredients: self.ingredients,
        }
    }
}

/// Scales `product` to `target_quantity` of `target_unit`.
///
/// Every usage entry is multiplied by `target_quantity / product.quantity`;
/// nothing is added, removed or reordered.
///
/// # Errors
/// - `target_quantity` must be a positive finite number.
/// - A non-positive `product.quantity` (unreachable for validated
///   records) is rejected instead of propagating NaN or infinity.
pub fn scale(
    product: &Product,
    target_quantity: f64,
    target_unit: &str,
) -> Result<ScaledRecipe, InvalidInput> {
    if !target_quantity.is_finite() || target_quantity <= 0.0 {
        return Err(InvalidInput::new(
            "target_quantity",
            format!("expected a number greater than zero, got `{target_quantity}`"),
        ));
    }
    if !product.quantity.is_finite() || product.quantity <= 0.0 {
        return Err(InvalidInput::new(
            "product_quantity",
            format!(
                "cannot scale `{}` from a batch size of `{}`",
                product.name, product.quantity
            ),
        ));
    }

    let factor = target_quantity / product.quantity;
    let ingredients = product
        .ingredients
        .iter()
        .map(|usage| IngredientUsage {
            name: usage.name.clone(),
            quantity: usage.quantity * factor,
            unit: usage.unit.clone(),
        })
        .collect();

    Ok(ScaledRecipe {
        target_quantity,
        target_unit: target_unit.to_string(),
        ingredients,
        unit_mismatch: target_unit != product.unit,
    })
}
