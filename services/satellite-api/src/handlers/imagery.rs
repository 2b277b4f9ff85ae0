//! Satellite imagery placeholder handler.

use std::sync::Arc;

use agro_common::{parse_date, BoundingBox};
use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

pub const DEFAULT_BANDS: &str = "true-color";

/// Query parameters for GET /api/satellite-imagery.
#[derive(Debug, Deserialize)]
pub struct ImageryQueryParams {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,

    /// Acquisition date, `YYYY-MM-DD`.
    pub date: String,

    /// Band mode label, passed through unchecked.
    #[serde(default = "default_bands")]
    pub bands: String,
}

fn default_bands() -> String {
    DEFAULT_BANDS.to_string()
}

impl ImageryQueryParams {
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageryResponse {
    pub image_url: String,
}

/// GET /api/satellite-imagery - Placeholder image URL for a region and date
#[instrument(skip(state, params), fields(date = %params.date, bands = %params.bands))]
pub async fn satellite_imagery_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ImageryQueryParams>,
) -> Result<Json<ImageryResponse>, ApiError> {
    let timer = RequestTimer::start("satellite_imagery");

    let result = parse_date(&params.date).map(|date| {
        state
            .generator
            .images()
            .resolve_image_url(&params.bbox(), date, &params.bands)
    });

    timer.finish(result.is_ok());
    let image_url = result.map_err(ApiError::imagery)?;

    info!(bbox = %params.bbox().log_key(), "Served imagery placeholder");

    Ok(Json(ImageryResponse { image_url }))
}
