//! Shopping surface handlers
//!
//! The external entry point of the pipeline: menu, orders, tracking,
//! cancellation, and the inventory-update cadence endpoint.

use application::{ApplicationError, ports::StylingPort, services::InventoryAction};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{DeliveryStatus, Order, OrderId, ShirtStyle};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Request body for placing an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Requested style name
    pub style_name: String,
    /// Number of shirts
    pub quantity: u32,
}

/// Caller-visible order outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    /// The order id generated for this request
    pub order_id: OrderId,
    /// Status string reported by the delivery stage, or the failure
    pub status: String,
}

/// Request body for inventory updates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRequest {
    /// Style to add or restock
    pub style_name: String,
}

/// Outcome of an inventory update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResponse {
    /// Which action the cadence selected
    pub action: InventoryAction,
}

/// The style catalog, as served to shoppers
pub async fn shopping_menu(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShirtStyle>>, ApiError> {
    let styles = state.styling.get_all_styles().await?;
    Ok(Json(styles))
}

/// Place an order.
///
/// A delivery-stage fault still reports the generated order id: the
/// response status reflects the failure while the body names the
/// order.
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Response, ApiError> {
    let order = Order {
        style_name: request.style_name,
        quantity: request.quantity,
    };

    match state.shopping.order_shirts(&order).await {
        Ok(status) => Ok((
            StatusCode::OK,
            Json(OrderStatusResponse {
                order_id: status.order_id,
                status: status.status,
            }),
        )
            .into_response()),
        Err(ApplicationError::DispatchFailed { order_id, stage }) => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(OrderStatusResponse {
                order_id,
                status: format!("dispatch failed at {stage}"),
            }),
        )
            .into_response()),
        Err(err) => Err(err.into()),
    }
}

/// Track an order through the delivery stage
pub async fn order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeliveryStatus>, ApiError> {
    let order_id = OrderId::parse(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let status = state.shopping.get_order_status(order_id).await?;
    Ok(Json(status))
}

/// Cancel an order
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeliveryStatus>, ApiError> {
    let order_id = OrderId::parse(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let status = state.shopping.cancel_order(order_id).await?;
    Ok(Json(status))
}

/// Add or restock a style, alternating on the request cadence
pub async fn update_inventory(
    State(state): State<AppState>,
    Json(request): Json<InventoryRequest>,
) -> Result<Json<InventoryResponse>, ApiError> {
    let action = state.shopping.update_inventory(&request.style_name).await?;
    Ok(Json(InventoryResponse { action }))
}
