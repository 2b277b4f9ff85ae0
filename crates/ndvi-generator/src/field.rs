//! Per-field NDVI sampling, statistics and zoning.

use agro_common::{parse_date, AgroError, AgroResult, BoundaryGeometry};
use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::season::season_factor;
use crate::{symmetric_uniform, MockIndexGenerator};

/// Average, minimum and maximum of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
}

/// One bin of the observed value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexZone {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub count: usize,
    /// Share of the whole sample population, 0-100.
    pub percentage: f64,
}

/// Everything produced for a single field request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIndexReport {
    pub date: NaiveDate,
    pub summary: IndexSummary,
    /// Visualization subsample, unordered.
    pub values: Vec<f64>,
    pub zones: Vec<IndexZone>,
    pub image_url: String,
}

impl MockIndexGenerator {
    /// Generate synthetic NDVI readings for a field on a `YYYY-MM-DD` date.
    ///
    /// The boundary is part of the contract but is not used numerically.
    pub fn generate_field_index<R: Rng + ?Sized>(
        &self,
        boundary: &BoundaryGeometry,
        date: &str,
        rng: &mut R,
    ) -> AgroResult<FieldIndexReport> {
        let date = parse_date(date)?;
        self.generate_field_index_on(boundary, date, rng)
    }

    /// Same as [`generate_field_index`](Self::generate_field_index) for an
    /// already parsed date.
    pub fn generate_field_index_on<R: Rng + ?Sized>(
        &self,
        boundary: &BoundaryGeometry,
        date: NaiveDate,
        rng: &mut R,
    ) -> AgroResult<FieldIndexReport> {
        let config = self.config();

        let season = season_factor(date.month());
        let base = (season + symmetric_uniform(rng, config.base_jitter))
            .clamp(config.base_min, config.base_max);

        let samples = draw_samples(rng, base, config.sample_std_dev, config.sample_count)?;
        let summary = summarize(&samples)?;
        let zones = build_zones(&samples, &summary, config.zone_count);

        let subsample_size = config.subsample_size.min(samples.len());
        let values: Vec<f64> = samples
            .choose_multiple(rng, subsample_size)
            .copied()
            .collect();

        debug!(
            date = %date,
            rings = boundary.ring_count(),
            vertices = boundary.vertex_count(),
            season,
            base,
            average = summary.average,
            zones = zones.len(),
            "Generated field index"
        );

        Ok(FieldIndexReport {
            date,
            summary,
            values,
            zones,
            image_url: self.images().ndvi_image_url(date),
        })
    }
}

/// Normal draws around `mean`, each clamped into `[0, 1]`.
fn draw_samples<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    count: usize,
) -> AgroResult<Vec<f64>> {
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| AgroError::computation(format!("Invalid sample distribution: {}", e)))?;

    Ok((0..count)
        .map(|_| normal.sample(rng).clamp(0.0, 1.0))
        .collect())
}

fn summarize(samples: &[f64]) -> AgroResult<IndexSummary> {
    if samples.is_empty() {
        return Err(AgroError::computation("No samples to summarize"));
    }

    let (minimum, maximum) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    Ok(IndexSummary {
        // Rounding in the sum can push the mean an ulp past the extremes.
        average: mean.clamp(minimum, maximum),
        minimum,
        maximum,
    })
}

/// Split `[minimum, maximum]` into `zone_count` equal-width bins.
///
/// Bins are half-open `[lo, hi)` except the last one, which also takes
/// values equal to the maximum, so every sample lands in exactly one bin.
/// Empty bins are left out.
fn build_zones(samples: &[f64], summary: &IndexSummary, zone_count: usize) -> Vec<IndexZone> {
    let edges = linspace(summary.minimum, summary.maximum, zone_count + 1);
    let total = samples.len() as f64;

    (0..zone_count)
        .filter_map(|i| {
            let (lo, hi) = (edges[i], edges[i + 1]);
            let last = i + 1 == zone_count;

            let (count, sum) = samples
                .iter()
                .filter(|&&v| v >= lo && (v < hi || (last && v <= hi)))
                .fold((0usize, 0.0f64), |(n, s), &v| (n + 1, s + v));

            (count > 0).then(|| IndexZone {
                min: lo,
                max: hi,
                average: sum / count as f64,
                count,
                percentage: count as f64 / total * 100.0,
            })
        })
        .collect()
}

/// `n` evenly spaced points from `start` to `stop`, both ends exact.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start; n];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratorConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn boundary() -> BoundaryGeometry {
        BoundaryGeometry::polygon(&[
            (-100.0, 35.0),
            (-98.0, 35.0),
            (-98.0, 37.0),
            (-100.0, 37.0),
            (-100.0, 35.0),
        ])
    }

    #[test]
    fn test_summary_bounds_hold_across_seeds() {
        let generator = MockIndexGenerator::default();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = generator
                .generate_field_index(&boundary(), "2024-04-10", &mut rng)
                .unwrap();
            let s = report.summary;

            assert!(0.0 <= s.minimum, "seed {}", seed);
            assert!(s.minimum <= s.average, "seed {}", seed);
            assert!(s.average <= s.maximum, "seed {}", seed);
            assert!(s.maximum <= 1.0, "seed {}", seed);
        }
    }

    #[test]
    fn test_subsample_size_and_range() {
        let generator = MockIndexGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);

        let report = generator
            .generate_field_index(&boundary(), "2024-07-15", &mut rng)
            .unwrap();

        assert_eq!(report.values.len(), 100);
        assert!(report.values.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(report.image_url, "https://example.com/ndvi-images/2024-07-15");
    }

    #[test]
    fn test_subsample_returns_everything_when_population_is_small() {
        let config = GeneratorConfig {
            sample_count: 30,
            ..Default::default()
        };
        let generator = MockIndexGenerator::new(config, Default::default());
        let mut rng = StdRng::seed_from_u64(3);

        let report = generator
            .generate_field_index(&boundary(), "2024-07-15", &mut rng)
            .unwrap();
        assert_eq!(report.values.len(), 30);
    }

    #[test]
    fn test_zone_percentages_cover_population() {
        let generator = MockIndexGenerator::default();
        let mut rng = StdRng::seed_from_u64(9);

        let report = generator
            .generate_field_index(&boundary(), "2024-10-01", &mut rng)
            .unwrap();

        assert!(!report.zones.is_empty());
        assert!(report.zones.len() <= 5);

        let count: usize = report.zones.iter().map(|z| z.count).sum();
        assert_eq!(count, 1000);

        let pct: f64 = report.zones.iter().map(|z| z.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);

        for zone in &report.zones {
            assert!(zone.min - 1e-12 <= zone.average && zone.average <= zone.max + 1e-12);
        }
        assert_eq!(report.zones.last().unwrap().max, report.summary.maximum);
    }

    #[test]
    fn test_july_average_clusters_high() {
        let generator = MockIndexGenerator::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..25 {
            let report = generator
                .generate_field_index(&boundary(), "2024-07-15", &mut rng)
                .unwrap();
            // Base sits in [0.61, 0.91]; the mean of 1000 draws stays close.
            assert!(
                (0.55..=0.95).contains(&report.summary.average),
                "average {}",
                report.summary.average
            );
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let generator = MockIndexGenerator::default();

        let a = generator
            .generate_field_index(&boundary(), "2024-05-20", &mut StdRng::seed_from_u64(11))
            .unwrap();
        let b = generator
            .generate_field_index(&boundary(), "2024-05-20", &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_boundary_does_not_affect_output() {
        let generator = MockIndexGenerator::default();
        let other = BoundaryGeometry::polygon(&[(10.0, 10.0), (11.0, 10.0), (10.0, 10.0)]);

        let a = generator
            .generate_field_index(&boundary(), "2024-05-20", &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = generator
            .generate_field_index(&other, "2024-05-20", &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_date_is_input_error() {
        let generator = MockIndexGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = generator
            .generate_field_index(&boundary(), "15-07-2024", &mut rng)
            .unwrap_err();
        assert!(matches!(err, AgroError::InputParse(_)));
    }

    #[test]
    fn test_invalid_distribution_is_computation_error() {
        let config = GeneratorConfig {
            sample_std_dev: f64::NAN,
            ..Default::default()
        };
        let generator = MockIndexGenerator::new(config, Default::default());
        let mut rng = StdRng::seed_from_u64(1);

        let err = generator
            .generate_field_index(&boundary(), "2024-07-15", &mut rng)
            .unwrap_err();
        assert!(matches!(err, AgroError::Computation(_)));
    }

    #[test]
    fn test_degenerate_range_lands_in_last_zone() {
        let samples = vec![0.5; 10];
        let summary = summarize(&samples).unwrap();
        let zones = build_zones(&samples, &summary, 5);

        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].count, 10);
        assert_eq!(zones[0].percentage, 100.0);
    }

    #[test]
    fn test_maximum_counted_in_last_zone() {
        let samples = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
        let summary = summarize(&samples).unwrap();
        let zones = build_zones(&samples, &summary, 5);

        let total: usize = zones.iter().map(|z| z.count).sum();
        assert_eq!(total, samples.len());
        let last = zones.last().unwrap();
        assert_eq!(last.max, 0.5);
        assert!(last.count >= 1);
    }

    #[test]
    fn test_empty_bins_are_omitted() {
        let samples = vec![0.0, 0.01, 0.02, 1.0];
        let summary = summarize(&samples).unwrap();
        let zones = build_zones(&samples, &summary, 5);

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].count, 3);
        assert_eq!(zones[0].percentage, 75.0);
        assert_eq!(zones[1].count, 1);
    }

    #[test]
    fn test_summarize_rejects_empty() {
        assert!(matches!(summarize(&[]), Err(AgroError::Computation(_))));
    }

    #[test]
    fn test_linspace_endpoints() {
        let edges = linspace(0.2, 0.7, 6);
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], 0.2);
        assert_eq!(edges[5], 0.7);
        assert!((edges[1] - 0.3).abs() < 1e-12);
    }
}
