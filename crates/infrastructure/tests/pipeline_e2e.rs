//! End-to-end tests over the real stage adapters, no mocks: the full
//! Shopping → Styling → {Printing, Packaging} → Delivery chain wired
//! in-process.

use std::sync::Arc;

use application::{ApplicationError, ShoppingService, StylingService, ports::StylingPort};
use domain::{DeliveryState, Order, OrderId, Stage, WrapKind};
use infrastructure::{DeliveryStage, FaultProfile, PackagingStage, PrintingStage};

fn quiet_styling() -> StylingService {
    StylingService::new(
        Arc::new(PrintingStage::new(FaultProfile::never())),
        Arc::new(PackagingStage::new(FaultProfile::never())),
    )
}

fn quiet_shopping() -> ShoppingService {
    ShoppingService::new(
        Arc::new(quiet_styling()),
        Arc::new(DeliveryStage::new(FaultProfile::never())),
    )
}

#[tokio::test]
async fn small_order_is_standard_wrapped() {
    let styling = quiet_styling();
    let packed = styling.make_shirts("style1", 5).await.unwrap();

    assert_eq!(packed.quantity(), 5);
    assert_eq!(packed.wrap, WrapKind::Standard);
    for shirt in &packed.shirts {
        assert_eq!(shirt.style.name, "style1");
    }
}

#[tokio::test]
async fn bulk_order_is_gift_wrapped() {
    let styling = quiet_styling();
    let packed = styling.make_shirts("style1", 40).await.unwrap();

    assert_eq!(packed.quantity(), 40);
    assert_eq!(packed.wrap, WrapKind::Gift);
}

#[tokio::test]
async fn forced_printing_fault_stops_the_chain() {
    let styling = StylingService::new(
        Arc::new(PrintingStage::new(
            FaultProfile::never().with_error_interval(1),
        )),
        Arc::new(PackagingStage::new(FaultProfile::never())),
    );

    let err = styling.make_shirts("style1", 5).await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::StageFault {
            stage: Stage::Printing
        }
    ));
}

#[tokio::test]
async fn order_returns_delivery_status_and_id() {
    let shopping = quiet_shopping();
    let order = Order::new("style1", 5).unwrap();

    let status = shopping.order_shirts(&order).await.unwrap();

    assert!(!status.order_id.to_string().is_empty());
    assert_eq!(status.status, DeliveryState::Scheduled.to_string());
}

#[tokio::test]
async fn delivery_fault_still_names_the_order() {
    let shopping = ShoppingService::new(
        Arc::new(quiet_styling()),
        Arc::new(DeliveryStage::new(
            FaultProfile::never().with_error_interval(1),
        )),
    );
    let order = Order::new("style1", 5).unwrap();

    let err = shopping.order_shirts(&order).await.unwrap_err();
    let ApplicationError::DispatchFailed { order_id, stage } = err else {
        unreachable!("Expected DispatchFailed, got {err:?}");
    };
    assert_eq!(stage, Stage::Delivery);
    assert!(!order_id.to_string().is_empty());
}

#[tokio::test]
async fn consecutive_orders_get_distinct_tracking_numbers() {
    let shopping = quiet_shopping();
    let order = Order::new("style1", 2).unwrap();

    shopping.order_shirts(&order).await.unwrap();
    shopping.order_shirts(&order).await.unwrap();

    let tracked = shopping.get_order_status(OrderId::new()).await.unwrap();
    assert_eq!(tracked.state, DeliveryState::Shipped);
    assert_eq!(tracked.tracking_number.map(|t| t.value()), Some(2));
}

#[tokio::test]
async fn cancel_reports_cancelled_state() {
    let shopping = quiet_shopping();
    let cancelled = shopping.cancel_order(OrderId::new()).await.unwrap();
    assert_eq!(cancelled.state, DeliveryState::Cancelled);
    assert!(cancelled.tracking_number.is_none());
}

#[tokio::test]
async fn menu_lists_seeded_styles_and_colors() {
    let styling = quiet_styling();
    let styles = styling.get_all_styles().await.unwrap();

    let names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"style1"));
    assert!(names.contains(&"style2"));
    // Derived from the printing stage's seeded color inventory
    assert!(names.contains(&"rgb"));
}

#[tokio::test]
async fn inventory_updates_run_against_real_stages() {
    let shopping = quiet_shopping();

    // Two restocks, then an add, per the modulo-3 cadence
    for _ in 0..3 {
        shopping.update_inventory("style2").await.unwrap();
    }
}
