//! Placeholder imagery URLs.
//!
//! No image is rendered or fetched. URLs are templated from a base, an
//! optional band label and the formatted date, so clients can wire up
//! image slots before a real provider exists.

use agro_common::{format_date, BoundingBox};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NDVI_BASE_URL: &str = "https://example.com/ndvi-images";
pub const DEFAULT_IMAGERY_BASE_URL: &str = "https://example.com/satellite-images";

/// Base URLs for the placeholder templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageryConfig {
    pub ndvi_base_url: String,
    pub imagery_base_url: String,
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            ndvi_base_url: DEFAULT_NDVI_BASE_URL.to_string(),
            imagery_base_url: DEFAULT_IMAGERY_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaceholderImageResolver {
    config: ImageryConfig,
}

impl PlaceholderImageResolver {
    pub fn new(config: ImageryConfig) -> Self {
        Self { config }
    }

    /// URL for a satellite image of `bbox` on `date` in the given band mode.
    ///
    /// `band_mode` is an open label ("true-color", "false-color", "ndvi" are
    /// the ones clients use today) and goes into the URL verbatim. The bbox
    /// is accepted for the provider-facing signature but does not affect
    /// the result.
    pub fn resolve_image_url(&self, _bbox: &BoundingBox, date: NaiveDate, band_mode: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.imagery_base_url.trim_end_matches('/'),
            band_mode,
            format_date(date)
        )
    }

    /// URL of the rendered NDVI map for `date`.
    pub fn ndvi_image_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}",
            self.config.ndvi_base_url.trim_end_matches('/'),
            format_date(date)
        )
    }
}
