//! Infrastructure layer for Tidewear
//!
//! Houses the synthetic-condition injector, the in-process stage
//! service adapters, configuration loading, and the tracing/OTel
//! bootstrap.

pub mod config;
pub mod faults;
pub mod stages;
pub mod telemetry;

pub use config::{AppConfig, ServerConfig, StagesConfig};
pub use faults::{FaultInjector, FaultProfile, LatencyBand};
pub use stages::{DeliveryStage, PackagingStage, PrintingStage};
pub use telemetry::{TelemetryConfig, TelemetryGuard, init_telemetry};
