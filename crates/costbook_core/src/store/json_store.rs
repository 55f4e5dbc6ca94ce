//! File-backed store with atomic full-document rewrites.
//!
//! # Responsibility
//! - Load and save the two JSON documents keyed by record name.
//! - Be the sole mutation point for ingredient and product state.
//!
//! # Invariants
//! - Insertion overwrites by name key: last write wins.
//! - Saves go through write-to-temp-then-rename, so an interrupted
//!   save leaves the previous document intact.
//! - Documents lacking a `schema_version` field are read as version 0.

use crate::input::InvalidInput;
use crate::model::{Ingredient, Product};
use crate::store::{DocumentKind, StoreError, StoreResult};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Current on-disk document schema version.
pub const LATEST_SCHEMA_VERSION: u32 = 1;

const SCHEMA_VERSION_KEY: &str = "schema_version";
const ENTRIES_KEY: &str = "entries";

/// Versioned envelope written around each name-keyed document.
#[derive(Serialize)]
struct Envelope<'a, T> {
    schema_version: u32,
    entries: &'a BTreeMap<String, T>,
}

/// Name-keyed ingredient/product state backed by two JSON documents.
///
/// Constructed once per process via [`Store::open`] and passed by
/// reference to collaborators; never a process-wide singleton.
#[derive(Debug)]
pub struct Store {
    data_dir: PathBuf,
    ingredients: BTreeMap<String, Ingredient>,
    products: BTreeMap<String, Product>,
}

impl Store {
    /// Opens a store rooted at `data_dir` and loads both documents.
    ///
    /// Missing documents yield empty collections; the directory is
    /// created if absent.
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| StoreError::DataDir {
            path: data_dir.clone(),
            source,
        })?;
        let mut store = Self {
            data_dir,
            ingredients: BTreeMap::new(),
            products: BTreeMap::new(),
        };
        store.load()?;
        Ok(store)
    }

    fn document_path(&self, document: DocumentKind) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    /// Re-reads both documents from disk, replacing in-memory state.
    ///
    /// # Errors
    /// - `Corrupt` when a document exists but cannot be parsed.
    /// - `UnsupportedSchemaVersion` when a document is from a newer build.
    pub fn load(&mut self) -> StoreResult<()> {
        self.ingredients = read_document(
            &self.document_path(DocumentKind::Ingredients),
            DocumentKind::Ingredients,
        )?;
        self.products = read_document(
            &self.document_path(DocumentKind::Products),
            DocumentKind::Products,
        )?;
        info!(
            "event=store_loaded module=core status=ok ingredients={} products={}",
            self.ingredients.len(),
            self.products.len()
        );
        Ok(())
    }

    /// Serializes both maps in full, overwriting prior content.
    ///
    /// Safe to call repeatedly; each document is replaced atomically.
    pub fn save(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::DataDir {
            path: self.data_dir.clone(),
            source,
        })?;
        write_document(
            &self.document_path(DocumentKind::Ingredients),
            DocumentKind::Ingredients,
            &self.ingredients,
        )?;
        write_document(
            &self.document_path(DocumentKind::Products),
            DocumentKind::Products,
            &self.products,
        )?;
        Ok(())
    }

    /// Validates, inserts/overwrites by name, and persists immediately.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> StoreResult<()> {
        ingredient.validate()?;
        let name = ingredient.name.clone();
        let replaced = self.ingredients.insert(name.clone(), ingredient).is_some();
        self.save()?;
        info!("event=ingredient_saved module=core status=ok name={name} replaced={replaced}");
        Ok(())
    }

    /// Validates, inserts/overwrites by name, and persists immediately.
    ///
    /// Referenced ingredient names are not checked for existence.
    pub fn add_product(&mut self, product: Product) -> StoreResult<()> {
        product.validate()?;
        let name = product.name.clone();
        let replaced = self.products.insert(name.clone(), product).is_some();
        self.save()?;
        info!("event=product_saved module=core status=ok name={name} replaced={replaced}");
        Ok(())
    }

    /// Looks up an ingredient by name. Absence is not an error.
    pub fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    /// Looks up a product by name. Absence is not an error.
    pub fn get_product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Overwrites an ingredient's cost and persists immediately.
    ///
    /// Returns `Ok(false)` without touching disk when `name` is absent.
    /// `new_cost` is validated before any mutation.
    pub fn update_ingredient_cost(&mut self, name: &str, new_cost: f64) -> StoreResult<bool> {
        if !new_cost.is_finite() || new_cost < 0.0 {
            return Err(InvalidInput::new(
                "new_cost",
                format!("expected a non-negative number, got `{new_cost}`"),
            )
            .into());
        }
        match self.ingredients.get_mut(name) {
            None => Ok(false),
            Some(ingredient) => {
                ingredient.cost = new_cost;
                self.save()?;
                info!("event=ingredient_cost_updated module=core status=ok name={name}");
                Ok(true)
            }
        }
    }

    /// Ingredient names in sorted order, for UI pickers.
    pub fn list_ingredient_names(&self) -> Vec<String> {
        self.ingredients.keys().cloned().collect()
    }

    /// Product names in sorted order, for UI pickers.
    pub fn list_product_names(&self) -> Vec<String> {
        self.products.keys().cloned().collect()
    }
}

fn read_document<T: DeserializeOwned>(
    path: &Path,
    document: DocumentKind,
) -> StoreResult<BTreeMap<String, T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => return Err(StoreError::Io { document, source }),
    };

    let value: Value = serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt {
        document,
        reason: err.to_string(),
    })?;
    let Value::Object(mut object) = value else {
        return Err(StoreError::Corrupt {
            document,
            reason: "expected a top-level JSON object".to_string(),
        });
    };

    // Documents written before versioning are bare name->record maps.
    let (version, entries) = match object.remove(SCHEMA_VERSION_KEY) {
        Some(version_value) => {
            let version = version_value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| StoreError::Corrupt {
                    document,
                    reason: format!("invalid {SCHEMA_VERSION_KEY} value `{version_value}`"),
                })?;
            let entries = object.remove(ENTRIES_KEY).ok_or_else(|| StoreError::Corrupt {
                document,
                reason: format!("missing {ENTRIES_KEY} object"),
            })?;
            (version, entries)
        }
        None => (0, Value::Object(object)),
    };

    if version > LATEST_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            document,
            version,
            latest_supported: LATEST_SCHEMA_VERSION,
        });
    }

    serde_json::from_value(entries).map_err(|err| StoreError::Corrupt {
        document,
        reason: err.to_string(),
    })
}

fn write_document<T: Serialize>(
    path: &Path,
    document: DocumentKind,
    entries: &BTreeMap<String, T>,
) -> StoreResult<()> {
    let envelope = Envelope {
        schema_version: LATEST_SCHEMA_VERSION,
        entries,
    };
    let body = serde_json::to_string_pretty(&envelope).map_err(|err| StoreError::Corrupt {
        document,
        reason: format!("failed to serialize: {err}"),
    })?;

    // Rename is atomic on the same filesystem; a crash mid-write leaves
    // the previous document readable.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, body).map_err(|source| StoreError::Io { document, source })?;
    fs::rename(&tmp_path, path).map_err(|source| StoreError::Io { document, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_document, DocumentKind, StoreError, LATEST_SCHEMA_VERSION};
    use crate::model::Ingredient;
    use std::collections::BTreeMap;

    #[test]
    fn read_document_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries: BTreeMap<String, Ingredient> =
            read_document(&dir.path().join("ingredients.json"), DocumentKind::Ingredients)
                .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn read_document_accepts_version_zero_bare_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingredients.json");
        std::fs::write(
            &path,
            r#"{"Flour":{"name":"Flour","quantity":1000.0,"unit":"grams","cost":40.0}}"#,
        )
        .unwrap();

        let entries: BTreeMap<String, Ingredient> =
            read_document(&path, DocumentKind::Ingredients).unwrap();
        assert_eq!(entries["Flour"].cost, 40.0);
    }

    #[test]
    fn read_document_rejects_newer_schema_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"{"schema_version":99,"entries":{}}"#).unwrap();

        let err = read_document::<Ingredient>(&path, DocumentKind::Products).unwrap_err();
        match err {
            StoreError::UnsupportedSchemaVersion {
                document,
                version,
                latest_supported,
            } => {
                assert_eq!(document, DocumentKind::Products);
                assert_eq!(version, 99);
                assert_eq!(latest_supported, LATEST_SCHEMA_VERSION);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_document_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingredients.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = read_document::<Ingredient>(&path, DocumentKind::Ingredients).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Corrupt {
                document: DocumentKind::Ingredients,
                ..
            }
        ));
    }
}
