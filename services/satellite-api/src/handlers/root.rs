//! Liveness probe at the service root.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_MESSAGE: &str = "SmartAgroX Satellite API";

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET / - Service banner
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_MESSAGE.to_string(),
    })
}
