//! Application-level errors
//!
//! Injected stage faults are expected, frequent outcomes in this
//! system, so they are modeled as values rather than panics and are
//! propagated upstream unchanged.

use domain::{DomainError, OrderId, Stage};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A stage reported a deliberately injected failure
    #[error("Stage {stage} failed: synthetic fault injected")]
    StageFault {
        /// The stage that produced the fault
        stage: Stage,
    },

    /// Delivery dispatch failed after the order was already created.
    ///
    /// Carries the order id so the caller-visible status can still
    /// report it alongside the failure.
    #[error("Dispatch of order {order_id} failed at stage {stage}")]
    DispatchFailed {
        /// The order whose dispatch failed
        order_id: OrderId,
        /// The stage that produced the fault
        stage: Stage,
    },

    /// Configuration error at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Shorthand for a synthetic fault at the given stage
    #[must_use]
    pub const fn fault(stage: Stage) -> Self {
        Self::StageFault { stage }
    }

    /// Whether this error is a deliberately injected fault
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(
            self,
            Self::StageFault { .. } | Self::DispatchFailed { .. }
        )
    }
}
