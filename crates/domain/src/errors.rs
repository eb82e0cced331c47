//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Order quantity must be at least one
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Style name must be non-empty
    #[error("Invalid style name: {0:?}")]
    InvalidStyleName(String),

    /// Order identifier could not be parsed
    #[error("Invalid order id: {0}")]
    InvalidOrderId(String),
}
