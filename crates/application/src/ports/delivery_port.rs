//! Delivery stage port

use async_trait::async_trait;
use domain::{DeliveryStatus, OrderId, PackedShirts};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for delivery stage operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeliveryPort: Send + Sync {
    /// Dispatch a packed order; assigns a fresh tracking number
    async fn dispatch(
        &self,
        order_id: OrderId,
        packed: PackedShirts,
    ) -> Result<DeliveryStatus, ApplicationError>;

    /// Report the current delivery status of an order
    async fn track_order(&self, order_id: OrderId) -> Result<DeliveryStatus, ApplicationError>;

    /// Cancel an order; has no effect on the tracking sequence
    async fn cancel_order(&self, order_id: OrderId) -> Result<DeliveryStatus, ApplicationError>;
}
