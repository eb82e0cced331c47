//! Printing stage
//!
//! Fabricates printed shirts and keeps a small in-memory color
//! inventory. Nothing is persisted.

use async_trait::async_trait;
use application::{error::ApplicationError, ports::PrintingPort};
use domain::{RequestSequence, Shirt, ShirtStyle, Stage};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::faults::{FaultInjector, FaultProfile};

/// In-process printing service
#[derive(Debug)]
pub struct PrintingStage {
    injector: FaultInjector,
    print_seq: RequestSequence,
    colors: RwLock<Vec<String>>,
}

impl PrintingStage {
    /// Create a printing stage with the given fault tuning
    #[must_use]
    pub fn new(profile: FaultProfile) -> Self {
        Self::with_injector(FaultInjector::new(profile))
    }

    /// Create a printing stage around an existing injector
    #[must_use]
    pub fn with_injector(injector: FaultInjector) -> Self {
        Self {
            injector,
            print_seq: RequestSequence::new(),
            colors: RwLock::new(vec!["rgb".to_string()]),
        }
    }
}

#[async_trait]
impl PrintingPort for PrintingStage {
    #[instrument(skip(self), fields(style = %style.name))]
    async fn print_shirts(
        &self,
        style: &ShirtStyle,
        quantity: u32,
    ) -> Result<Vec<Shirt>, ApplicationError> {
        if self.injector.interval_error(&self.print_seq) {
            return Err(ApplicationError::fault(Stage::Printing));
        }
        self.injector.pace().await;

        let shirts = (0..quantity).map(|_| Shirt::new(style.clone())).collect();
        debug!(quantity, "Shirts printed");
        Ok(shirts)
    }

    #[instrument(skip(self))]
    async fn add_print_color(&self, color: &str) -> Result<(), ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Printing));
        }
        self.injector.pace().await;

        let mut colors = self.colors.write();
        if !colors.iter().any(|c| c == color) {
            colors.push(color.to_string());
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn restock_color(&self, color: &str) -> Result<(), ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Printing));
        }
        self.injector.pace().await;
        debug!(color, "Color restocked");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn available_colors(&self) -> Result<Vec<String>, ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Printing));
        }
        self.injector.pace().await;
        Ok(self.colors.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_stage() -> PrintingStage {
        PrintingStage::with_injector(FaultInjector::disabled())
    }

    #[tokio::test]
    async fn prints_requested_quantity_in_style() {
        let stage = quiet_stage();
        let style = ShirtStyle::named("style1").unwrap();

        let shirts = stage.print_shirts(&style, 5).await.unwrap();

        assert_eq!(shirts.len(), 5);
        for shirt in &shirts {
            assert_eq!(shirt.style.name, "style1");
            assert_eq!(shirt.style.image_url, "style1Image");
        }
    }

    #[tokio::test]
    async fn forced_interval_always_fails() {
        let stage = PrintingStage::new(FaultProfile::never().with_error_interval(1));
        let style = ShirtStyle::named("style1").unwrap();

        for _ in 0..5 {
            let err = stage.print_shirts(&style, 5).await.unwrap_err();
            assert!(matches!(
                err,
                ApplicationError::StageFault {
                    stage: Stage::Printing
                }
            ));
        }
    }

    #[tokio::test]
    async fn every_third_print_fails() {
        let stage = PrintingStage::new(FaultProfile::never().with_error_interval(3));
        let style = ShirtStyle::named("style1").unwrap();

        for round in 1..=9u64 {
            let result = stage.print_shirts(&style, 1).await;
            assert_eq!(result.is_err(), round % 3 == 0, "call {round}");
        }
    }

    #[tokio::test]
    async fn added_color_shows_up_in_catalog() {
        let stage = quiet_stage();

        stage.add_print_color("coral").await.unwrap();
        // Adding twice does not duplicate
        stage.add_print_color("coral").await.unwrap();

        let colors = stage.available_colors().await.unwrap();
        assert_eq!(colors, vec!["rgb".to_string(), "coral".to_string()]);
    }

    #[tokio::test]
    async fn restock_succeeds_without_faults() {
        let stage = quiet_stage();
        stage.restock_color("rgb").await.unwrap();
    }
}
