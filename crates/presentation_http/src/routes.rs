//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Shopping surface
        .route("/shop/menu", get(handlers::shopping::shopping_menu))
        .route("/shop/orders", post(handlers::shopping::place_order))
        .route(
            "/shop/orders/{id}/status",
            get(handlers::shopping::order_status),
        )
        .route(
            "/shop/orders/{id}/cancel",
            post(handlers::shopping::cancel_order),
        )
        .route("/shop/inventory", post(handlers::shopping::update_inventory))
        // Styling surface
        .route("/style/styles", get(handlers::styling::list_styles))
        .route("/style/shirts", post(handlers::styling::make_shirts))
        // Attach state
        .with_state(state)
}
