//! Historical NDVI handler.

use std::sync::Arc;

use agro_common::{format_date, BoundingBox};
use axum::{
    extract::{Extension, Query},
    Json,
};
use ndvi_generator::HistoricalPoint;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

/// Query parameters for GET /api/historical-ndvi.
#[derive(Debug, Deserialize)]
pub struct HistoricalQueryParams {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,

    /// First observation date, `YYYY-MM-DD`.
    pub start_date: String,

    /// Last possible observation date (inclusive), `YYYY-MM-DD`.
    pub end_date: String,
}

impl HistoricalQueryParams {
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }
}

/// Parallel arrays of dates and values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalResponse {
    pub dates: Vec<String>,
    pub ndvi_values: Vec<f64>,
}

impl From<Vec<HistoricalPoint>> for HistoricalResponse {
    fn from(points: Vec<HistoricalPoint>) -> Self {
        let (dates, ndvi_values) = points
            .into_iter()
            .map(|p| (format_date(p.date), p.value))
            .unzip();
        Self { dates, ndvi_values }
    }
}

/// GET /api/historical-ndvi - Synthetic NDVI time series for a region
#[instrument(skip(state, params), fields(start = %params.start_date, end = %params.end_date))]
pub async fn historical_ndvi_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HistoricalQueryParams>,
) -> Result<Json<HistoricalResponse>, ApiError> {
    let timer = RequestTimer::start("historical_ndvi");
    let bbox = params.bbox();

    let result = state.rng.with_rng(|rng| {
        state
            .generator
            .generate_historical_series(&bbox, &params.start_date, &params.end_date, rng)
    });

    timer.finish(result.is_ok());
    let points = result.map_err(ApiError::historical)?;

    info!(points = points.len(), "Served historical NDVI");

    Ok(Json(points.into()))
}
