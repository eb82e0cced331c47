//! Pipeline stage names

use std::fmt;

use serde::{Deserialize, Serialize};

/// One hop in the service chain.
///
/// Used to attribute results and injected faults to the stage that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// External-facing entry point
    Shopping,
    /// Orchestrates printing and packaging
    Styling,
    /// Prints shirts in a requested style
    Printing,
    /// Wraps printed shirts
    Packaging,
    /// Dispatches and tracks orders
    Delivery,
}

impl Stage {
    /// Stage name as used in span attributes and error bodies
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shopping => "shopping",
            Self::Styling => "styling",
            Self::Printing => "printing",
            Self::Packaging => "packaging",
            Self::Delivery => "delivery",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
