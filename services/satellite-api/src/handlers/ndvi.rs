//! Field NDVI handler.

use std::sync::Arc;

use agro_common::BoundaryGeometry;
use axum::{extract::Extension, Json};
use ndvi_generator::{FieldIndexReport, IndexZone};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

/// Request body for POST /api/ndvi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NdviRequest {
    /// Field outline. Checked for shape only.
    pub boundaries: BoundaryGeometry,

    /// Observation date, `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NdviResponse {
    pub average_ndvi: f64,
    pub min_ndvi: f64,
    pub max_ndvi: f64,
    pub ndvi_values: Vec<f64>,
    pub ndvi_image_url: String,
    pub zones: Vec<IndexZone>,
}

impl From<FieldIndexReport> for NdviResponse {
    fn from(report: FieldIndexReport) -> Self {
        Self {
            average_ndvi: report.summary.average,
            min_ndvi: report.summary.minimum,
            max_ndvi: report.summary.maximum,
            ndvi_values: report.values,
            ndvi_image_url: report.image_url,
            zones: report.zones,
        }
    }
}

/// POST /api/ndvi - Synthetic NDVI statistics for a field
#[instrument(skip(state, request), fields(date = %request.date))]
pub async fn ndvi_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<NdviRequest>,
) -> Result<Json<NdviResponse>, ApiError> {
    let timer = RequestTimer::start("ndvi");

    let result = state.rng.with_rng(|rng| {
        state
            .generator
            .generate_field_index(&request.boundaries, &request.date, rng)
    });

    timer.finish(result.is_ok());
    let report = result.map_err(ApiError::ndvi)?;

    info!(
        average = report.summary.average,
        zones = report.zones.len(),
        "Served field NDVI"
    );

    Ok(Json(report.into()))
}
