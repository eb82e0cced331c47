//! Styling surface handlers
//!
//! The styling orchestrator exposed directly, for driving the
//! printing/packaging half of the chain without going through
//! shopping.

use application::ports::StylingPort;
use axum::{Json, extract::State};
use domain::{PackedShirts, ShirtStyle};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Request body for making shirts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeShirtsRequest {
    /// Style to print
    pub style_name: String,
    /// Number of shirts
    pub quantity: u32,
}

/// The style catalog
pub async fn list_styles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShirtStyle>>, ApiError> {
    let styles = state.styling.get_all_styles().await?;
    Ok(Json(styles))
}

/// Print and wrap shirts
pub async fn make_shirts(
    State(state): State<AppState>,
    Json(request): Json<MakeShirtsRequest>,
) -> Result<Json<PackedShirts>, ApiError> {
    let packed = state
        .styling
        .make_shirts(&request.style_name, request.quantity)
        .await?;
    Ok(Json(packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_shirts_request_deserializes() {
        let json = r#"{"style_name":"style1","quantity":40}"#;
        let request: MakeShirtsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantity, 40);
    }
}
