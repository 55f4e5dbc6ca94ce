//! Recipe costing use-case service.
//!
//! # Responsibility
//! - Provide the raw-string command boundary UI callers talk to.
//! - Parse and validate every input before any store mutation.
//!
//! # Invariants
//! - No store mutation happens when input validation fails.
//! - Absent lookups are sentinels (`Option`/`false`), not errors,
//!   except where an operation cannot proceed without the record.

use crate::calc::price::{price, CostConfig, PriceBreakdown, RawCostConfig};
use crate::calc::scale::{scale, ScaledRecipe};
use crate::input::{self, InvalidInput};
use crate::model::{Ingredient, Product};
use crate::store::{Store, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for recipe costing use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A user-supplied field failed parsing or a precondition.
    Input(InvalidInput),
    /// Persistence-layer failure.
    Store(StoreError),
    /// The named product does not exist in the store.
    ProductNotFound(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::ProductNotFound(name) => write!(f, "product not found: `{name}`"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::ProductNotFound(_) => None,
        }
    }
}

impl From<InvalidInput> for ServiceError {
    fn from(value: InvalidInput) -> Self {
        Self::Input(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Invalid(err) => Self::Input(err),
            other => Self::Store(other),
        }
    }
}

/// Raw usage-entry input as collected by the product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageInput {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// Use-case service wrapping an explicitly owned [`Store`].
///
/// The store lifecycle stays visible to the embedding application:
/// construct, mutate through this service, drop. No global state.
pub struct RecipeService {
    store: Store,
}

impl RecipeService {
    /// Creates a service around an opened store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Read-only access for collaborators that only query.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Parses raw ingredient fields and persists the record.
    pub fn add_ingredient(
        &mut self,
        name: &str,
        quantity: &str,
        unit: &str,
        cost: &str,
    ) -> ServiceResult<()> {
        let name = input::required_name("name", name)?;
        let quantity = input::positive_real("quantity", quantity)?;
        let cost = input::non_negative_real("cost", cost)?;
        self.store
            .add_ingredient(Ingredient::new(name.clone(), quantity, unit.trim(), cost))?;
        info!("event=ingredient_added module=core status=ok name={name}");
        Ok(())
    }

    /// Parses raw product fields and persists the record.
    ///
    /// At least one usage entry is required; this creation-time rule
    /// lives here at the collaborator boundary, not on the record.
    pub fn add_product(
        &mut self,
        name: &str,
        quantity: &str,
        unit: &str,
        usages: &[UsageInput],
    ) -> ServiceResult<()> {
        let name = input::required_name("name", name)?;
        let quantity = input::positive_real("quantity", quantity)?;
        if usages.is_empty() {
            return Err(InvalidInput::new("ingredients", "at least one ingredient is required").into());
        }

        let mut product = Product::new(name.clone(), quantity, unit.trim());
        for usage in usages {
            let usage_name = input::required_name("ingredient_name", &usage.name)?;
            let usage_quantity = input::positive_real("ingredient_quantity", &usage.quantity)?;
            product.add_ingredient(usage_name, usage_quantity, usage.unit.trim());
        }

        self.store.add_product(product)?;
        info!(
            "event=product_added module=core status=ok name={name} ingredients={}",
            usages.len()
        );
        Ok(())
    }

    /// Parses and applies a new cost for an existing ingredient.
    ///
    /// Returns `Ok(false)` when the ingredient is absent; nothing is
    /// written in that case.
    pub fn update_ingredient_cost(&mut self, name: &str, new_cost: &str) -> ServiceResult<bool> {
        let name = input::required_name("name", name)?;
        let new_cost = input::non_negative_real("new_cost", new_cost)?;
        let updated = self.store.update_ingredient_cost(&name, new_cost)?;
        if !updated {
            warn!("event=ingredient_cost_updated module=core status=skipped name={name}");
        }
        Ok(updated)
    }

    /// Scales a stored product to a raw target quantity/unit.
    pub fn scale_product(
        &self,
        product_name: &str,
        target_quantity: &str,
        target_unit: &str,
    ) -> ServiceResult<ScaledRecipe> {
        let product = self
            .store
            .get_product(product_name)
            .ok_or_else(|| ServiceError::ProductNotFound(product_name.to_string()))?;
        let target_quantity = input::positive_real("target_quantity", target_quantity)?;
        let scaled = scale(product, target_quantity, target_unit)?;
        if scaled.unit_mismatch {
            warn!(
                "event=unit_mismatch module=core status=warn product={product_name} from={} to={target_unit}",
                product.unit
            );
        }
        Ok(scaled)
    }

    /// Scales a stored product and persists the result as a new product.
    ///
    /// An empty `new_name` falls back to `"<source>_scaled"`.
    pub fn save_scaled_product(
        &mut self,
        source_name: &str,
        new_name: &str,
        target_quantity: &str,
        target_unit: &str,
    ) -> ServiceResult<ScaledRecipe> {
        let scaled = self.scale_product(source_name, target_quantity, target_unit)?;
        let new_name = if new_name.trim().is_empty() {
            format!("{source_name}_scaled")
        } else {
            new_name.trim().to_string()
        };
        self.store.add_product(scaled.clone().into_product(new_name))?;
        Ok(scaled)
    }

    /// Prices a stored product against raw cost-structure inputs.
    pub fn price_product(
        &self,
        product_name: &str,
        raw: &RawCostConfig,
    ) -> ServiceResult<PriceBreakdown> {
        let product = self
            .store
            .get_product(product_name)
            .ok_or_else(|| ServiceError::ProductNotFound(product_name.to_string()))?;
        let config = CostConfig::from_raw(raw)?;
        let breakdown = price(product, &self.store, &config);
        if !breakdown.missing_ingredients.is_empty() {
            warn!(
                "event=missing_ingredients module=core status=warn product={product_name} names={}",
                breakdown.missing_ingredients.join(",")
            );
        }
        Ok(breakdown)
    }

    /// Looks up an ingredient by name. Absence is not an error.
    pub fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.store.get_ingredient(name)
    }

    /// Looks up a product by name. Absence is not an error.
    pub fn get_product(&self, name: &str) -> Option<&Product> {
        self.store.get_product(name)
    }

    /// Ingredient names in sorted order.
    pub fn list_ingredient_names(&self) -> Vec<String> {
        self.store.list_ingredient_names()
    }

    /// Product names in sorted order.
    pub fn list_product_names(&self) -> Vec<String> {
        self.store.list_product_names()
    }
}
