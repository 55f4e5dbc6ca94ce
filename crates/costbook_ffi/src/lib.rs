//! UI-facing FFI crate for CostBook.
//!
//! # Responsibility
//! - Expose the core command boundary to an embedding UI runtime.
//! - Keep all parsing and validation inside `costbook_core`.

pub mod api;
