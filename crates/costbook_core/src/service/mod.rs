//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and calculator calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage and parsing details.

pub mod recipe_service;

pub use recipe_service::{RecipeService, ServiceError, ServiceResult, UsageInput};
