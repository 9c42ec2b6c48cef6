//! Registry error model.

use thiserror::Error;

use crate::product::ProductId;

/// Result type used across the registry.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-level error.
///
/// Only two failure kinds exist. The payloads are diagnostic detail for logs;
/// the HTTP layer answers each kind with a fixed message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Input was absent or malformed (e.g. missing required fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No product carries the requested id.
    #[error("product {0} not found")]
    NotFound(ProductId),
}

impl RegistryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }
}
