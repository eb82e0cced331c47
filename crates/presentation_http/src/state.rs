//! Application state shared across handlers

use std::sync::Arc;

use application::{ShoppingService, StylingService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Shopping orchestrator, the external-facing entry point
    pub shopping: Arc<ShoppingService>,
    /// Styling orchestrator, also exposed directly
    pub styling: Arc<StylingService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
