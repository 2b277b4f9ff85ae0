//! Synthetic vegetation index generation.
//!
//! Stands in for a real satellite imagery provider. Given a field boundary
//! and a date, [`MockIndexGenerator`] produces a plausible distribution of
//! NDVI readings shaped by a seasonal curve, plus summary statistics, a
//! zone breakdown and a placeholder image URL. It can also produce a
//! temporally smooth historical series for a region.
//!
//! All randomness is injected: every operation takes an `&mut impl Rng`, so
//! callers decide between entropy and a seeded generator.
//!
//! # Example
//!
//! ```rust
//! use agro_common::BoundaryGeometry;
//! use ndvi_generator::MockIndexGenerator;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let generator = MockIndexGenerator::default();
//! let boundary = BoundaryGeometry::polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let report = generator
//!     .generate_field_index(&boundary, "2024-07-15", &mut rng)
//!     .unwrap();
//! assert!(report.summary.minimum <= report.summary.average);
//! ```

pub mod config;
pub mod field;
pub mod history;
pub mod imagery;
pub mod season;

pub use config::{ConfigError, GeneratorConfig};
pub use field::{FieldIndexReport, IndexSummary, IndexZone};
pub use history::HistoricalPoint;
pub use imagery::{ImageryConfig, PlaceholderImageResolver};
pub use season::season_factor;

use rand::Rng;

/// Produces synthetic NDVI data.
///
/// Stateless apart from its configuration; safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct MockIndexGenerator {
    config: GeneratorConfig,
    images: PlaceholderImageResolver,
}

impl MockIndexGenerator {
    pub fn new(config: GeneratorConfig, images: PlaceholderImageResolver) -> Self {
        Self { config, images }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn images(&self) -> &PlaceholderImageResolver {
        &self.images
    }
}

/// Uniform draw from `[-amplitude, amplitude]`.
pub(crate) fn symmetric_uniform<R: Rng + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    if amplitude <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-amplitude..=amplitude)
}
