//! Tracking number assigned by the delivery stage

use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery tracking number.
///
/// Assigned from the delivery stage's request sequence at dispatch
/// time; purely synthetic, carries no logistics meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingNumber(u64);

impl TrackingNumber {
    /// Wrap a raw sequence value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TrackingNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
