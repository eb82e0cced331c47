//! Packaging stage port

use async_trait::async_trait;
use domain::{PackedShirts, Shirt};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for packaging stage operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PackagingPort: Send + Sync {
    /// Wrap shirts in standard packaging
    async fn wrap_shirts(&self, shirts: Vec<Shirt>) -> Result<PackedShirts, ApplicationError>;

    /// Gift wrap shirts (bulk orders)
    async fn gift_wrap(&self, shirts: Vec<Shirt>) -> Result<PackedShirts, ApplicationError>;

    /// Restock a wrapping material
    async fn restock_material(&self, material: &str) -> Result<(), ApplicationError>;

    /// List available wrapping types
    async fn packing_types(&self) -> Result<Vec<String>, ApplicationError>;
}
