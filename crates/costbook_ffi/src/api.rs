//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI via FRB.
//! - Keep error semantics simple: envelopes with `ok` + message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All numeric user input crosses as raw strings; core parses it.

use costbook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    RawCostConfig, RecipeService, ServiceError, Store, UsageInput,
};
use log::info;
use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration fails.
/// - Never panics; returns empty string on success and error message
///   on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Fixes the data directory holding the two JSON documents.
///
/// # FFI contract
/// - Must be called before any store-backed command.
/// - First call wins; later calls with a different path return an error.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_data_dir(path: String) -> String {
    let requested = PathBuf::from(path.trim());
    if requested.as_os_str().is_empty() {
        return "data_dir cannot be empty".to_string();
    }
    let active = DATA_DIR.get_or_init(|| requested.clone());
    if *active == requested {
        info!(
            "event=data_dir_configured module=ffi status=ok path={}",
            active.display()
        );
        String::new()
    } else {
        format!(
            "data directory already configured at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// Generic action response envelope for command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// One scaled usage entry for UI rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredientItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Scale command response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleResponse {
    pub ok: bool,
    /// True when the target unit differs from the product's unit.
    pub unit_mismatch: bool,
    pub items: Vec<ScaledIngredientItem>,
    pub message: String,
}

/// Price command response envelope carrying the full breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceResponse {
    pub ok: bool,
    pub message: String,
    pub base_cost: f64,
    pub wastage_cost: f64,
    pub taxes_cost: f64,
    pub utilities: f64,
    pub packaging: f64,
    pub shipping: f64,
    pub labour: f64,
    pub subtotal: f64,
    pub profit_amount: f64,
    pub final_price: f64,
    /// Usage entries priced at zero because their ingredient is gone.
    pub missing_ingredients: Vec<String>,
}

/// Raw usage-entry input crossing the FFI boundary as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntryInput {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

fn with_service<T>(
    op: impl FnOnce(&mut RecipeService) -> Result<T, ServiceError>,
) -> Result<T, String> {
    let data_dir = DATA_DIR
        .get()
        .ok_or_else(|| "data directory not configured; call configure_data_dir first".to_string())?;
    let store = Store::open(data_dir).map_err(|err| err.to_string())?;
    let mut service = RecipeService::new(store);
    op(&mut service).map_err(|err| err.to_string())
}

/// Records an ingredient from raw form fields.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; validation failures become envelope messages.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_ingredient(
    name: String,
    quantity: String,
    unit: String,
    cost: String,
) -> ActionResponse {
    match with_service(|service| service.add_ingredient(&name, &quantity, &unit, &cost)) {
        Ok(()) => ActionResponse::success(format!("Ingredient \"{}\" saved.", name.trim())),
        Err(err) => ActionResponse::failure(format!("entry_add_ingredient failed: {err}")),
    }
}

/// Records a product from raw form fields plus its usage entries.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Requires at least one usage entry.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_product(
    name: String,
    quantity: String,
    unit: String,
    ingredients: Vec<UsageEntryInput>,
) -> ActionResponse {
    let usages: Vec<UsageInput> = ingredients
        .into_iter()
        .map(|entry| UsageInput {
            name: entry.name,
            quantity: entry.quantity,
            unit: entry.unit,
        })
        .collect();
    match with_service(|service| service.add_product(&name, &quantity, &unit, &usages)) {
        Ok(()) => ActionResponse::success(format!("Product \"{}\" saved.", name.trim())),
        Err(err) => ActionResponse::failure(format!("entry_add_product failed: {err}")),
    }
}

/// Overwrites an existing ingredient's cost.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Unknown names succeed with a "nothing changed" message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_update_ingredient_cost(name: String, new_cost: String) -> ActionResponse {
    match with_service(|service| service.update_ingredient_cost(&name, &new_cost)) {
        Ok(true) => ActionResponse::success("Cost updated."),
        Ok(false) => ActionResponse::success("Ingredient not found; nothing changed."),
        Err(err) => ActionResponse::failure(format!("entry_update_ingredient_cost failed: {err}")),
    }
}

/// Scales a stored product to a raw target quantity/unit.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Unit mismatch is advisory; items are still returned.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_scale_recipe(
    product_name: String,
    target_quantity: String,
    target_unit: String,
) -> ScaleResponse {
    match with_service(|service| {
        service.scale_product(&product_name, &target_quantity, &target_unit)
    }) {
        Ok(scaled) => {
            let message = if scaled.unit_mismatch {
                "Unit mismatch! Results may be inaccurate.".to_string()
            } else {
                format!("Scaled to {} {}.", scaled.target_quantity, scaled.target_unit)
            };
            ScaleResponse {
                ok: true,
                unit_mismatch: scaled.unit_mismatch,
                items: scaled
                    .ingredients
                    .into_iter()
                    .map(|usage| ScaledIngredientItem {
                        name: usage.name,
                        quantity: usage.quantity,
                        unit: usage.unit,
                    })
                    .collect(),
                message,
            }
        }
        Err(err) => ScaleResponse {
            ok: false,
            unit_mismatch: false,
            items: Vec::new(),
            message: format!("entry_scale_recipe failed: {err}"),
        },
    }
}

/// Scales a stored product and persists the result as a new product.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Empty `new_name` defaults to `<source>_scaled`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_save_scaled_product(
    source_name: String,
    new_name: String,
    target_quantity: String,
    target_unit: String,
) -> ActionResponse {
    match with_service(|service| {
        service.save_scaled_product(&source_name, &new_name, &target_quantity, &target_unit)
    }) {
        Ok(_) => ActionResponse::success("Scaled product saved."),
        Err(err) => ActionResponse::failure(format!("entry_save_scaled_product failed: {err}")),
    }
}

/// Prices a stored product against raw cost-structure fields.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Percentages are whole numbers ("10" means 10%).
/// - Never panics; failures zero the numeric fields.
#[flutter_rust_bridge::frb(sync)]
#[allow(clippy::too_many_arguments)]
pub fn entry_price_product(
    product_name: String,
    wastage_pct: String,
    utilities: String,
    packaging: String,
    shipping: String,
    taxes_pct: String,
    labour: String,
    profit_pct: String,
) -> PriceResponse {
    let raw = RawCostConfig {
        wastage_pct,
        utilities,
        packaging,
        shipping,
        taxes_pct,
        labour,
        profit_pct,
    };
    match with_service(|service| service.price_product(&product_name, &raw)) {
        Ok(breakdown) => PriceResponse {
            ok: true,
            message: breakdown.summary(&product_name, "₹"),
            base_cost: breakdown.base_cost,
            wastage_cost: breakdown.wastage_cost,
            taxes_cost: breakdown.taxes_cost,
            utilities: breakdown.utilities,
            packaging: breakdown.packaging,
            shipping: breakdown.shipping,
            labour: breakdown.labour,
            subtotal: breakdown.subtotal,
            profit_amount: breakdown.profit_amount,
            final_price: breakdown.final_price,
            missing_ingredients: breakdown.missing_ingredients,
        },
        Err(err) => PriceResponse {
            ok: false,
            message: format!("entry_price_product failed: {err}"),
            base_cost: 0.0,
            wastage_cost: 0.0,
            taxes_cost: 0.0,
            utilities: 0.0,
            packaging: 0.0,
            shipping: 0.0,
            labour: 0.0,
            subtotal: 0.0,
            profit_amount: 0.0,
            final_price: 0.0,
            missing_ingredients: Vec::new(),
        },
    }
}

/// Sorted ingredient names for UI pickers.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; returns an empty list when the store cannot open.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list_ingredients() -> Vec<String> {
    with_service(|service| Ok(service.list_ingredient_names())).unwrap_or_default()
}

/// Sorted product names for UI pickers.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; returns an empty list when the store cannot open.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list_products() -> Vec<String> {
    with_service(|service| Ok(service.list_product_names())).unwrap_or_default()
}
