//! Application layer for Tidewear
//!
//! Orchestrates the stage services behind ports: Styling composes
//! Printing and Packaging, Shopping composes Styling and Delivery.
//! Synthetic faults from the stages are ordinary values here and flow
//! upstream unchanged.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ShoppingService, StylingService};
