//! Conversion of generation failures into HTTP responses.
//!
//! Every failure on a data endpoint becomes a 500 with a `detail` message
//! prefixed by the endpoint's context. There are no finer-grained codes.

use agro_common::AgroError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const NDVI_ERROR_PREFIX: &str = "Error processing NDVI data";
pub const HISTORICAL_ERROR_PREFIX: &str = "Error processing historical NDVI";
pub const IMAGERY_ERROR_PREFIX: &str = "Error fetching satellite imagery";

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

/// A failed data request.
#[derive(Debug)]
pub struct ApiError {
    prefix: &'static str,
    source: AgroError,
}

impl ApiError {
    pub fn new(prefix: &'static str, source: AgroError) -> Self {
        Self { prefix, source }
    }

    pub fn ndvi(source: AgroError) -> Self {
        Self::new(NDVI_ERROR_PREFIX, source)
    }

    pub fn historical(source: AgroError) -> Self {
        Self::new(HISTORICAL_ERROR_PREFIX, source)
    }

    pub fn imagery(source: AgroError) -> Self {
        Self::new(IMAGERY_ERROR_PREFIX, source)
    }

    pub fn detail(&self) -> String {
        format!("{}: {}", self.prefix, self.source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail();
        tracing::error!(kind = self.source.kind(), "{}", detail);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { detail }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_prefixes() {
        let err = ApiError::ndvi(AgroError::input("bad date"));
        assert_eq!(err.detail(), "Error processing NDVI data: bad date");

        let err = ApiError::historical(AgroError::computation("boom"));
        assert_eq!(err.detail(), "Error processing historical NDVI: boom");

        let err = ApiError::imagery(AgroError::input("bad date"));
        assert_eq!(err.detail(), "Error fetching satellite imagery: bad date");
    }

    #[test]
    fn test_into_response_is_500() {
        let response = ApiError::ndvi(AgroError::input("x")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
