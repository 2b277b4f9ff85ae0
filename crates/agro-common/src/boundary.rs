//! Field boundary as received from clients.

use serde::{Deserialize, Serialize};

/// A field outline in GeoJSON-like shape: a type tag plus rings of positions.
///
/// The index generator never looks inside the rings. Only the shape of the
/// payload is checked, by deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundaryGeometry {
    /// Geometry type tag, normally "Polygon".
    #[serde(rename = "type")]
    pub type_: String,

    /// Rings of `[lon, lat]` positions. Extra ordinates are kept as-is.
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

impl BoundaryGeometry {
    /// Build a single-ring polygon from `(lon, lat)` pairs.
    pub fn polygon(ring: &[(f64, f64)]) -> Self {
        Self {
            type_: "Polygon".to_string(),
            coordinates: vec![ring.iter().map(|&(lon, lat)| vec![lon, lat]).collect()],
        }
    }

    pub fn ring_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Total number of positions across all rings.
    pub fn vertex_count(&self) -> usize {
        self.coordinates.iter().map(Vec::len).sum()
    }
}
