//! Styling orchestrator
//!
//! Realizes an order by printing shirts and routing them to packaging:
//! standard wrap below the gift threshold, gift wrap at or above it.
//! Failures are not transactional; shirts printed before a packaging
//! fault are discarded with the error.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::{Order, PackedShirts, ShirtStyle, WrapKind};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{PackagingPort, PrintingPort, StylingPort},
};

/// Orchestrates the printing and packaging stages
pub struct StylingService {
    printing: Arc<dyn PrintingPort>,
    packaging: Arc<dyn PackagingPort>,
    catalog: Vec<ShirtStyle>,
}

impl fmt::Debug for StylingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylingService")
            .field("catalog", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl StylingService {
    /// Create a styling service over the two downstream stages
    pub fn new(printing: Arc<dyn PrintingPort>, packaging: Arc<dyn PackagingPort>) -> Self {
        Self {
            printing,
            packaging,
            catalog: seeded_catalog(),
        }
    }
}

fn seeded_catalog() -> Vec<ShirtStyle> {
    ["style1", "style2"]
        .iter()
        .filter_map(|name| ShirtStyle::named(name).ok())
        .collect()
}

#[async_trait]
impl StylingPort for StylingService {
    #[instrument(skip(self))]
    async fn make_shirts(
        &self,
        style_name: &str,
        quantity: u32,
    ) -> Result<PackedShirts, ApplicationError> {
        let order = Order::new(style_name, quantity)?;
        let style = ShirtStyle::named(&order.style_name)?;

        let shirts = self.printing.print_shirts(&style, quantity).await?;
        debug!(printed = shirts.len(), "Shirts printed");

        let packed = match WrapKind::for_quantity(quantity) {
            WrapKind::Standard => self.packaging.wrap_shirts(shirts).await?,
            WrapKind::Gift => self.packaging.gift_wrap(shirts).await?,
        };

        info!(
            quantity = packed.quantity(),
            wrap = %packed.wrap,
            "Order styled and packed"
        );
        Ok(packed)
    }

    #[instrument(skip(self))]
    async fn get_all_styles(&self) -> Result<Vec<ShirtStyle>, ApplicationError> {
        // Independent reads, no ordering requirement between them
        let (colors, packing) = tokio::join!(
            self.printing.available_colors(),
            self.packaging.packing_types()
        );
        let colors = colors?;
        let packing = packing?;
        debug!(
            colors = colors.len(),
            packing_types = packing.len(),
            "Catalog inputs fetched"
        );

        // Seeded styles plus one derived style per printable color
        let mut styles = self.catalog.clone();
        for color in &colors {
            if styles.iter().all(|s| s.name != *color) {
                if let Ok(style) = ShirtStyle::named(color) {
                    styles.push(style);
                }
            }
        }
        Ok(styles)
    }

    #[instrument(skip(self))]
    async fn add_style(&self, name: &str) -> Result<(), ApplicationError> {
        self.printing.add_print_color(name).await
    }

    #[instrument(skip(self))]
    async fn restock_style(&self, name: &str) -> Result<(), ApplicationError> {
        // Successful only if both restocks succeed
        self.printing.restock_color(name).await?;
        self.packaging.restock_material(name).await
    }
}
