//! Error types for the date picker field.

use thiserror::Error;

use crate::surface::Slot;

/// Errors raised by the field.
///
/// Only construction problems and use-after-teardown surface here. Rejected
/// intents are absorbed or reported through `on_invalid_selection`.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Date picker container not found: {0}")]
    MissingContainer(String),
    #[error("Date picker surface is missing slot: {0}")]
    MissingSlot(Slot),
    #[error("Date picker field has been destroyed")]
    Destroyed,
    #[error("Invalid ISO date: {0}")]
    InvalidDate(String),
    #[error("Invalid ISO month: {0}")]
    InvalidMonth(String),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;
