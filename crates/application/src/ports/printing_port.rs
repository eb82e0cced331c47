//! Printing stage port
//!
//! The printing stage produces shirts in a requested style and keeps
//! a small color inventory.

use async_trait::async_trait;
use domain::{Shirt, ShirtStyle};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for printing stage operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PrintingPort: Send + Sync {
    /// Print `quantity` shirts in the given style
    async fn print_shirts(
        &self,
        style: &ShirtStyle,
        quantity: u32,
    ) -> Result<Vec<Shirt>, ApplicationError>;

    /// Add a new print color to the inventory
    async fn add_print_color(&self, color: &str) -> Result<(), ApplicationError>;

    /// Restock an existing print color
    async fn restock_color(&self, color: &str) -> Result<(), ApplicationError>;

    /// List the colors currently available for printing
    async fn available_colors(&self) -> Result<Vec<String>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PrintingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PrintingPort>();
    }
}
