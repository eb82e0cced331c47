//! Styling orchestrator port
//!
//! Shopping composes against this interface rather than the concrete
//! styling service, mirroring the deployment boundary between the two.

use async_trait::async_trait;
use domain::{PackedShirts, ShirtStyle};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the styling orchestrator
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StylingPort: Send + Sync {
    /// Print and wrap `quantity` shirts of the named style
    async fn make_shirts(
        &self,
        style_name: &str,
        quantity: u32,
    ) -> Result<PackedShirts, ApplicationError>;

    /// The merged style catalog
    async fn get_all_styles(&self) -> Result<Vec<ShirtStyle>, ApplicationError>;

    /// Register a new style
    async fn add_style(&self, name: &str) -> Result<(), ApplicationError>;

    /// Restock an existing style (color and wrapping material)
    async fn restock_style(&self, name: &str) -> Result<(), ApplicationError>;
}
