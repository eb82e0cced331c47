//! HTTP presentation layer for Tidewear
//!
//! Exposes the shopping and styling surfaces of the pipeline over a
//! JSON API and wires the in-process stage services together at
//! startup.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
