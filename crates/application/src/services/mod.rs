//! Orchestrator services

mod shopping_service;
mod styling_service;

pub use shopping_service::{InventoryAction, ShoppingService};
pub use styling_service::StylingService;
