//! Inbound orders and caller-visible order status

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::OrderId};

/// An inbound shirt order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Requested style name
    pub style_name: String,
    /// Number of shirts
    pub quantity: u32,
}

impl Order {
    /// Create a validated order.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty style name or a zero quantity.
    pub fn new(style_name: &str, quantity: u32) -> Result<Self, DomainError> {
        if style_name.trim().is_empty() {
            return Err(DomainError::InvalidStyleName(style_name.to_string()));
        }
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        Ok(Self {
            style_name: style_name.to_string(),
            quantity,
        })
    }

    /// Validate an order deserialized from a request body
    ///
    /// # Errors
    ///
    /// Same rules as [`Order::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::new(&self.style_name, self.quantity).map(|_| ())
    }
}

/// The composite status returned to the caller after ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    /// The order this status refers to
    pub order_id: OrderId,
    /// Status string reported by the last stage in the chain
    pub status: String,
}

impl OrderStatus {
    /// Create an order status
    pub fn new(order_id: OrderId, status: impl Into<String>) -> Self {
        Self {
            order_id,
            status: status.into(),
        }
    }
}
