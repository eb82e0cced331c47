//! Shopping orchestrator
//!
//! The external-facing entry point of the pipeline. Orders flow
//! through Styling and then Delivery; tracking and cancellation go
//! straight to Delivery. Inventory updates alternate between adding
//! and restocking styles on a request-counter cadence.

use std::{fmt, sync::Arc};

use domain::{DeliveryStatus, Order, OrderId, OrderStatus, RequestSequence, Stage};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DeliveryPort, StylingPort},
};

/// Every Nth inventory update registers a new style instead of
/// restocking an existing one
const ADD_STYLE_INTERVAL: u64 = 3;

/// Which action an inventory update performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryAction {
    /// A new style was registered
    Added,
    /// An existing style was restocked
    Restocked,
}

/// Orchestrates styling and delivery for incoming orders
pub struct ShoppingService {
    styling: Arc<dyn StylingPort>,
    delivery: Arc<dyn DeliveryPort>,
    inventory_seq: RequestSequence,
}

impl fmt::Debug for ShoppingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingService").finish_non_exhaustive()
    }
}

impl ShoppingService {
    /// Create a shopping service over styling and delivery
    pub fn new(styling: Arc<dyn StylingPort>, delivery: Arc<dyn DeliveryPort>) -> Self {
        Self {
            styling,
            delivery,
            inventory_seq: RequestSequence::new(),
        }
    }

    /// Place an order: style the shirts, then dispatch them.
    ///
    /// A styling failure propagates unchanged and delivery is never
    /// invoked. A delivery failure is reported as
    /// [`ApplicationError::DispatchFailed`] so the already-generated
    /// order id stays visible to the caller.
    #[instrument(skip(self), fields(style = %order.style_name, quantity = order.quantity))]
    pub async fn order_shirts(&self, order: &Order) -> Result<OrderStatus, ApplicationError> {
        order.validate()?;
        let order_id = OrderId::new();

        let packed = self
            .styling
            .make_shirts(&order.style_name, order.quantity)
            .await?;

        match self.delivery.dispatch(order_id, packed).await {
            Ok(status) => {
                info!(%order_id, state = %status.state, "Order dispatched");
                Ok(OrderStatus::new(order_id, status.state.to_string()))
            },
            Err(err) => {
                warn!(%order_id, error = %err, "Dispatch failed");
                let stage = match err {
                    ApplicationError::StageFault { stage } => stage,
                    _ => Stage::Delivery,
                };
                Err(ApplicationError::DispatchFailed { order_id, stage })
            },
        }
    }

    /// Track an order through the delivery stage
    #[instrument(skip(self))]
    pub async fn get_order_status(
        &self,
        order_id: OrderId,
    ) -> Result<DeliveryStatus, ApplicationError> {
        self.delivery.track_order(order_id).await
    }

    /// Cancel an order through the delivery stage
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        order_id: OrderId,
    ) -> Result<DeliveryStatus, ApplicationError> {
        self.delivery.cancel_order(order_id).await
    }

    /// Update inventory for a style.
    ///
    /// Every [`ADD_STYLE_INTERVAL`]th call registers the style as new;
    /// all other calls restock it.
    #[instrument(skip(self))]
    pub async fn update_inventory(
        &self,
        style_name: &str,
    ) -> Result<InventoryAction, ApplicationError> {
        if self.inventory_seq.next() % ADD_STYLE_INTERVAL == 0 {
            self.styling.add_style(style_name).await?;
            Ok(InventoryAction::Added)
        } else {
            self.styling.restock_style(style_name).await?;
            Ok(InventoryAction::Restocked)
        }
    }
}
