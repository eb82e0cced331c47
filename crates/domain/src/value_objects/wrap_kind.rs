//! Wrapping selection for packed shirts

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a batch of shirts is wrapped.
///
/// Orders below the gift threshold get standard wrap; larger orders
/// are gift wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapKind {
    /// Standard wrap for small orders
    #[default]
    Standard,
    /// Gift wrap for bulk orders
    Gift,
}

impl WrapKind {
    /// Quantity at which orders switch to gift wrap
    pub const GIFT_THRESHOLD: u32 = 30;

    /// Select the wrap for a given order quantity
    #[must_use]
    pub const fn for_quantity(quantity: u32) -> Self {
        if quantity >= Self::GIFT_THRESHOLD {
            Self::Gift
        } else {
            Self::Standard
        }
    }
}

impl fmt::Display for WrapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Gift => write!(f, "gift"),
        }
    }
}
