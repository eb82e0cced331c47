//! Delivery stage
//!
//! Dispatches packed orders and fabricates tracking numbers from a
//! dedicated request sequence: dispatch assigns the next number, track
//! reads the latest one, cancel leaves the sequence untouched.

use async_trait::async_trait;
use application::{error::ApplicationError, ports::DeliveryPort};
use domain::{DeliveryStatus, OrderId, PackedShirts, RequestSequence, Stage, TrackingNumber};
use tracing::{debug, instrument};

use crate::faults::{FaultInjector, FaultProfile};

/// In-process delivery service
#[derive(Debug)]
pub struct DeliveryStage {
    injector: FaultInjector,
    dispatch_seq: RequestSequence,
    tracking_seq: RequestSequence,
}

impl DeliveryStage {
    /// Create a delivery stage with the given fault tuning
    #[must_use]
    pub fn new(profile: FaultProfile) -> Self {
        Self::with_injector(FaultInjector::new(profile))
    }

    /// Create a delivery stage around an existing injector
    #[must_use]
    pub fn with_injector(injector: FaultInjector) -> Self {
        Self {
            injector,
            dispatch_seq: RequestSequence::new(),
            tracking_seq: RequestSequence::new(),
        }
    }
}

#[async_trait]
impl DeliveryPort for DeliveryStage {
    #[instrument(skip(self, packed), fields(%order_id, quantity = packed.quantity()))]
    async fn dispatch(
        &self,
        order_id: OrderId,
        packed: PackedShirts,
    ) -> Result<DeliveryStatus, ApplicationError> {
        if self.injector.interval_error(&self.dispatch_seq) {
            return Err(ApplicationError::fault(Stage::Delivery));
        }
        self.injector.pace().await;

        let tracking = TrackingNumber::new(self.tracking_seq.next());
        debug!(%tracking, "Order dispatched");
        Ok(DeliveryStatus::scheduled(order_id, tracking))
    }

    #[instrument(skip(self), fields(%order_id))]
    async fn track_order(&self, order_id: OrderId) -> Result<DeliveryStatus, ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Delivery));
        }
        self.injector.pace().await;

        let tracking = TrackingNumber::new(self.tracking_seq.current());
        Ok(DeliveryStatus::shipped(order_id, tracking))
    }

    #[instrument(skip(self), fields(%order_id))]
    async fn cancel_order(&self, order_id: OrderId) -> Result<DeliveryStatus, ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Delivery));
        }
        self.injector.pace().await;
        Ok(DeliveryStatus::cancelled(order_id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::{DeliveryState, Shirt, ShirtStyle, WrapKind};

    use super::*;

    fn quiet_stage() -> DeliveryStage {
        DeliveryStage::with_injector(FaultInjector::disabled())
    }

    fn packed(count: usize) -> PackedShirts {
        let style = ShirtStyle::named("style1").unwrap();
        let shirts = (0..count).map(|_| Shirt::new(style.clone())).collect();
        PackedShirts::new(shirts, WrapKind::Standard)
    }

    #[tokio::test]
    async fn dispatch_assigns_increasing_tracking_numbers() {
        let stage = quiet_stage();
        let first = stage.dispatch(OrderId::new(), packed(1)).await.unwrap();
        let second = stage.dispatch(OrderId::new(), packed(1)).await.unwrap();

        assert_eq!(first.tracking_number, Some(TrackingNumber::new(1)));
        assert_eq!(second.tracking_number, Some(TrackingNumber::new(2)));
        assert_eq!(first.state, DeliveryState::Scheduled);
    }

    #[tokio::test]
    async fn track_reads_without_consuming_a_number() {
        let stage = quiet_stage();
        let id = OrderId::new();
        stage.dispatch(id, packed(1)).await.unwrap();

        let tracked = stage.track_order(id).await.unwrap();
        let tracked_again = stage.track_order(id).await.unwrap();

        assert_eq!(tracked.tracking_number, Some(TrackingNumber::new(1)));
        assert_eq!(tracked_again.tracking_number, Some(TrackingNumber::new(1)));
        assert_eq!(tracked.state, DeliveryState::Shipped);
    }

    #[tokio::test]
    async fn cancel_does_not_touch_the_sequence() {
        let stage = quiet_stage();
        let id = OrderId::new();
        stage.dispatch(id, packed(1)).await.unwrap();

        let cancelled = stage.cancel_order(id).await.unwrap();
        assert_eq!(cancelled.state, DeliveryState::Cancelled);
        assert!(cancelled.tracking_number.is_none());

        let next = stage.dispatch(OrderId::new(), packed(1)).await.unwrap();
        assert_eq!(next.tracking_number, Some(TrackingNumber::new(2)));
    }

    #[tokio::test]
    async fn forced_dispatch_fault_leaves_tracking_untouched() {
        let stage = DeliveryStage::new(FaultProfile::never().with_error_interval(1));

        let err = stage.dispatch(OrderId::new(), packed(1)).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::StageFault {
                stage: Stage::Delivery
            }
        ));

        // No tracking number was consumed by the failed dispatch
        let quiet = quiet_stage();
        let status = quiet.track_order(OrderId::new()).await.unwrap();
        assert_eq!(status.tracking_number, Some(TrackingNumber::new(0)));
    }

    #[tokio::test]
    async fn concurrent_dispatches_get_unique_tracking_numbers() {
        let stage = Arc::new(quiet_stage());
        let mut handles = Vec::new();
        for _ in 0..50 {
            let stage = Arc::clone(&stage);
            handles.push(tokio::spawn(async move {
                stage.dispatch(OrderId::new(), packed(1)).await
            }));
        }

        let mut numbers = Vec::new();
        for handle in handles {
            let status = handle.await.unwrap().unwrap();
            numbers.push(status.tracking_number.unwrap().value());
        }
        numbers.sort_unstable();

        let expected: Vec<u64> = (1..=50).collect();
        assert_eq!(numbers, expected);
    }
}
