//! Cost-plus price calculator.
//!
//! # Responsibility
//! - Sum direct ingredient costs and overheads into an itemized
//!   breakdown with a percentage margin on top.
//! - Validate raw cost-structure inputs field by field.
//!
//! # Invariants
//! - Usage entries naming an unknown ingredient contribute zero cost
//!   and never fail the calculation; they are reported by name instead.
//! - Every intermediate value is carried in the breakdown so callers
//!   render without recomputation.

use crate::input::{self, InvalidInput};
use crate::model::Product;
use crate::store::Store;

/// Cost-structure inputs. Percentages are whole numbers: `10` means 10%.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostConfig {
    pub wastage_pct: f64,
    pub utilities: f64,
    pub packaging: f64,
    pub shipping: f64,
    pub taxes_pct: f64,
    pub labour: f64,
    pub profit_pct: f64,
}

/// Cost-structure inputs as raw strings from the UI form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCostConfig {
    pub wastage_pct: String,
    pub utilities: String,
    pub packaging: String,
    pub shipping: String,
    pub taxes_pct: String,
    pub labour: String,
    pub profit_pct: String,
}

impl Default for RawCostConfig {
    /// UI forms pre-fill every cost field with `"0"`.
    fn default() -> Self {
        Self {
            wastage_pct: "0".to_string(),
            utilities: "0".to_string(),
            packaging: "0".to_string(),
            shipping: "0".to_string(),
            taxes_pct: "0".to_string(),
            labour: "0".to_string(),
            profit_pct: "0".to_string(),
        }
    }
}

impl CostConfig {
    /// Parses every field individually, so a failure names exactly the
    /// offending field for re-prompting.
    pub fn from_raw(raw: &RawCostConfig) -> Result<Self, InvalidInput> {
        Ok(Self {
            wastage_pct: input::real("wastage_pct", &raw.wastage_pct)?,
            utilities: input::real("utilities", &raw.utilities)?,
            packaging: input::real("packaging", &raw.packaging)?,
            shipping: input::real("shipping", &raw.shipping)?,
            taxes_pct: input::real("taxes_pct", &raw.taxes_pct)?,
            labour: input::real("labour", &raw.labour)?,
            profit_pct: input::real("profit_pct", &raw.profit_pct)?,
        })
    }
}

/// Itemized cost-plus breakdown carrying every intermediate value.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Sum of per-unit ingredient costs times used quantities.
    pub base_cost: f64,
    /// `base_cost * wastage_pct / 100`.
    pub wastage_cost: f64,
    /// `base_cost * taxes_pct / 100`.
    pub taxes_cost: f64,
    pub utilities: f64,
    pub packaging: f64,
    pub shipping: f64,
    pub labour: f64,
    /// Base plus wastage, taxes and the four fixed costs.
    pub subtotal: f64,
    /// `subtotal * profit_pct / 100`.
    pub profit_amount: f64,
    /// `subtotal + profit_amount`.
    pub final_price: f64,
    /// Usage entries whose ingredient no longer exists in the store.
    /// They contributed zero cost; surfaced so the caller can warn
    /// about possible data-entry errors instead of hiding them.
    pub missing_ingredients: Vec<String>,
}

impl PriceBreakdown {
    /// Renders the itemized breakdown with one fixed currency symbol.
    pub fn summary(&self, product_name: &str, symbol: &str) -> String {
        let mut lines = vec![
            format!("Price breakdown for {product_name}:"),
            format!("Base cost: {symbol}{:.2}", self.base_cost),
            format!("Wastage: {symbol}{:.2}", self.wastage_cost),
            format!("Utilities: {symbol}{:.2}", self.utilities),
            format!("Packaging: {symbol}{:.2}", self.packaging),
            format!("Shipping: {symbol}{:.2}", self.shipping),
            format!("Taxes: {symbol}{:.2}", self.taxes_cost),
            format!("Labour: {symbol}{:.2}", self.labour),
            format!("Subtotal: {symbol}{:.2}", self.subtotal),
            format!("Profit: {symbol}{:.2}", self.profit_amount),
            format!("Final price: {symbol}{:.2}", self.final_price),
        ];
        if !self.missing_ingredients.is_empty() {
            lines.push(format!(
                "Warning: unknown ingredients priced at zero: {}",
                self.missing_ingredients.join(", ")
            ));
        }
        lines.join("\n")
    }
}

/// Computes the cost-plus breakdown for `product` against `store` costs.
///
/// Read-only against the store. Dangling usage references are skipped
/// at zero cost and collected into `missing_ingredients`.
pub fn price(product: &Product, store: &Store, config: &CostConfig) -> PriceBreakdown {
    let mut base_cost = 0.0;
    let mut missing_ingredients = Vec::new();

    for usage in &product.ingredients {
        match store.get_ingredient(&usage.name) {
            Some(ingredient) => base_cost += ingredient.unit_cost() * usage.quantity,
            None => missing_ingredients.push(usage.name.clone()),
        }
    }

    let wastage_cost = base_cost * config.wastage_pct / 100.0;
    let taxes_cost = base_cost * config.taxes_pct / 100.0;
    let subtotal = base_cost
        + wastage_cost
        + taxes_cost
        + config.utilities
        + config.packaging
        + config.shipping
        + config.labour;
    let profit_amount = subtotal * config.profit_pct / 100.0;
    let final_price = subtotal + profit_amount;

    PriceBreakdown {
        base_cost,
        wastage_cost,
        taxes_cost,
        utilities: config.utilities,
        packaging: config.packaging,
        shipping: config.shipping,
        labour: config.labour,
        subtotal,
        profit_amount,
        final_price,
        missing_ingredients,
    }
}
