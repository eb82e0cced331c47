//! Delivery stage status records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{OrderId, TrackingNumber};

/// Lifecycle state reported by the delivery stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    /// Dispatch accepted, delivery scheduled
    Scheduled,
    /// Order is on its way
    Shipped,
    /// Order was cancelled
    Cancelled,
}

impl fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Shipped => write!(f, "shipped"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Status payload produced by delivery operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStatus {
    /// The order this status refers to
    pub order_id: OrderId,
    /// Tracking number, absent for cancellations
    pub tracking_number: Option<TrackingNumber>,
    /// Current delivery state
    pub state: DeliveryState,
}

impl DeliveryStatus {
    /// Status for a freshly dispatched order
    #[must_use]
    pub const fn scheduled(order_id: OrderId, tracking_number: TrackingNumber) -> Self {
        Self {
            order_id,
            tracking_number: Some(tracking_number),
            state: DeliveryState::Scheduled,
        }
    }

    /// Status for a tracked in-flight order
    #[must_use]
    pub const fn shipped(order_id: OrderId, tracking_number: TrackingNumber) -> Self {
        Self {
            order_id,
            tracking_number: Some(tracking_number),
            state: DeliveryState::Shipped,
        }
    }

    /// Status for a cancelled order
    #[must_use]
    pub const fn cancelled(order_id: OrderId) -> Self {
        Self {
            order_id,
            tracking_number: None,
            state: DeliveryState::Cancelled,
        }
    }
}
