//! Shirt, style, and packed-batch records

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::WrapKind};

/// A shirt style from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShirtStyle {
    /// Style name
    pub name: String,
    /// URL of the style's preview image
    pub image_url: String,
}

impl ShirtStyle {
    /// Create a style, deriving the image URL from the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or whitespace-only.
    pub fn named(name: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidStyleName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            image_url: format!("{name}Image"),
        })
    }
}

/// A single printed shirt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shirt {
    /// The style this shirt was printed in
    pub style: ShirtStyle,
}

impl Shirt {
    /// Create a shirt in the given style
    #[must_use]
    pub const fn new(style: ShirtStyle) -> Self {
        Self { style }
    }
}

/// A wrapped batch of shirts, output of the packaging stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedShirts {
    /// The shirts in the batch
    pub shirts: Vec<Shirt>,
    /// How the batch was wrapped
    pub wrap: WrapKind,
}

impl PackedShirts {
    /// Wrap a batch of shirts
    #[must_use]
    pub const fn new(shirts: Vec<Shirt>, wrap: WrapKind) -> Self {
        Self { shirts, wrap }
    }

    /// Number of shirts in the batch
    #[must_use]
    pub fn quantity(&self) -> usize {
        self.shirts.len()
    }
}
