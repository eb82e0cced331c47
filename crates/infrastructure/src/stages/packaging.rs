//! Packaging stage
//!
//! Wraps printed shirts, standard or gift, and tracks the available
//! wrapping types.

use async_trait::async_trait;
use application::{error::ApplicationError, ports::PackagingPort};
use domain::{PackedShirts, RequestSequence, Shirt, Stage, WrapKind};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::faults::{FaultInjector, FaultProfile};

/// In-process packaging service
#[derive(Debug)]
pub struct PackagingStage {
    injector: FaultInjector,
    // Standard and gift wrap count against the same endpoint cadence
    wrap_seq: RequestSequence,
    materials: RwLock<Vec<String>>,
}

impl PackagingStage {
    /// Create a packaging stage with the given fault tuning
    #[must_use]
    pub fn new(profile: FaultProfile) -> Self {
        Self::with_injector(FaultInjector::new(profile))
    }

    /// Create a packaging stage around an existing injector
    #[must_use]
    pub fn with_injector(injector: FaultInjector) -> Self {
        Self {
            injector,
            wrap_seq: RequestSequence::new(),
            materials: RwLock::new(vec!["standard".to_string(), "gift".to_string()]),
        }
    }

    async fn wrap(&self, shirts: Vec<Shirt>, wrap: WrapKind) -> Result<PackedShirts, ApplicationError> {
        if self.injector.interval_error(&self.wrap_seq) {
            return Err(ApplicationError::fault(Stage::Packaging));
        }
        self.injector.pace().await;

        let packed = PackedShirts::new(shirts, wrap);
        debug!(quantity = packed.quantity(), wrap = %wrap, "Shirts wrapped");
        Ok(packed)
    }
}

#[async_trait]
impl PackagingPort for PackagingStage {
    #[instrument(skip(self, shirts), fields(quantity = shirts.len()))]
    async fn wrap_shirts(&self, shirts: Vec<Shirt>) -> Result<PackedShirts, ApplicationError> {
        self.wrap(shirts, WrapKind::Standard).await
    }

    #[instrument(skip(self, shirts), fields(quantity = shirts.len()))]
    async fn gift_wrap(&self, shirts: Vec<Shirt>) -> Result<PackedShirts, ApplicationError> {
        self.wrap(shirts, WrapKind::Gift).await
    }

    #[instrument(skip(self))]
    async fn restock_material(&self, material: &str) -> Result<(), ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Packaging));
        }
        self.injector.pace().await;

        let mut materials = self.materials.write();
        if !materials.iter().any(|m| m == material) {
            materials.push(material.to_string());
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn packing_types(&self) -> Result<Vec<String>, ApplicationError> {
        if self.injector.probabilistic_error() {
            return Err(ApplicationError::fault(Stage::Packaging));
        }
        self.injector.pace().await;
        Ok(self.materials.read().clone())
    }
}
