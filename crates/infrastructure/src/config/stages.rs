//! Per-stage fault tuning sections.

use serde::{Deserialize, Serialize};

use crate::faults::FaultProfile;

/// Fault and latency tuning for each stage service endpoint group
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StagesConfig {
    /// Printing stage tuning
    #[serde(default)]
    pub printing: FaultProfile,

    /// Packaging stage tuning
    #[serde(default)]
    pub packaging: FaultProfile,

    /// Delivery stage tuning
    #[serde(default)]
    pub delivery: FaultProfile,
}
