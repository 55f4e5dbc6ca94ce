//! Durable storage for ingredient and product documents.
//!
//! # Responsibility
//! - Own the name-keyed ingredient/product maps and their lifecycle.
//! - Keep JSON document details inside the core persistence boundary.
//!
//! # Invariants
//! - Absent documents load as empty collections; present-but-corrupt
//!   documents fail loudly and are never replaced by empty state.
//! - Every mutating operation persists both documents before returning.

use crate::input::InvalidInput;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod json_store;

pub use json_store::{Store, LATEST_SCHEMA_VERSION};

pub type StoreResult<T> = Result<T, StoreError>;

/// Identifies which durable document an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Ingredients,
    Products,
}

impl DocumentKind {
    pub(crate) fn file_name(self) -> &'static str {
        match self {
            Self::Ingredients => "ingredients.json",
            Self::Products => "products.json",
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ingredients => write!(f, "ingredients"),
            Self::Products => write!(f, "products"),
        }
    }
}

/// Storage error for document load/save and store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing one document.
    Io {
        document: DocumentKind,
        source: io::Error,
    },
    /// The data directory could not be created.
    DataDir { path: PathBuf, source: io::Error },
    /// A document exists but cannot be parsed as the expected structure.
    Corrupt {
        document: DocumentKind,
        reason: String,
    },
    /// A document was written by a newer schema than this build supports.
    UnsupportedSchemaVersion {
        document: DocumentKind,
        version: u32,
        latest_supported: u32,
    },
    /// A record failed validation before persistence; nothing was written.
    Invalid(InvalidInput),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { document, source } => {
                write!(f, "failed to access {document} document: {source}")
            }
            Self::DataDir { path, source } => {
                write!(
                    f,
                    "failed to create data directory `{}`: {source}",
                    path.display()
                )
            }
            Self::Corrupt { document, reason } => {
                write!(f, "corrupt {document} document: {reason}")
            }
            Self::UnsupportedSchemaVersion {
                document,
                version,
                latest_supported,
            } => write!(
                f,
                "{document} document schema version {version} is newer than supported {latest_supported}"
            ),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::DataDir { source, .. } => Some(source),
            Self::Invalid(err) => Some(err),
            Self::Corrupt { .. } | Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<InvalidInput> for StoreError {
    fn from(value: InvalidInput) -> Self {
        Self::Invalid(value)
    }
}
