//! Historical NDVI series.
//!
//! Values follow a first-order autoregressive walk: each step blends the
//! seasonal baseline for the current month with the previous value and a
//! little noise, which gives a smoother curve than independent draws.

use agro_common::{parse_date, AgroError, AgroResult, BoundingBox};
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::season::season_factor;
use crate::{symmetric_uniform, MockIndexGenerator};

/// A single observation in a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl MockIndexGenerator {
    /// Generate a series from `start` to `end` (inclusive, `YYYY-MM-DD`).
    ///
    /// Observations are `history_step_days` apart starting at `start`. An
    /// empty series is returned when `start` is after `end`. The bbox is
    /// not used numerically.
    pub fn generate_historical_series<R: Rng + ?Sized>(
        &self,
        bbox: &BoundingBox,
        start: &str,
        end: &str,
        rng: &mut R,
    ) -> AgroResult<Vec<HistoricalPoint>> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        self.generate_historical_series_between(bbox, start, end, rng)
    }

    /// Same as [`generate_historical_series`](Self::generate_historical_series)
    /// for already parsed dates.
    ///
    /// Fails if the configured step is not representable as a duration.
    pub fn generate_historical_series_between<R: Rng + ?Sized>(
        &self,
        bbox: &BoundingBox,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut R,
    ) -> AgroResult<Vec<HistoricalPoint>> {
        let config = self.config();
        let step = Duration::try_days(config.history_step_days).ok_or_else(|| {
            AgroError::computation(format!(
                "History step of {} days is out of range",
                config.history_step_days
            ))
        })?;
        let trend = config.history_trend_weight;

        let mut last = config.history_initial + symmetric_uniform(rng, config.history_initial_jitter);
        let mut points = Vec::new();
        let mut current = start;

        while current <= end {
            let season = season_factor(current.month());
            last = trend * season
                + (1.0 - trend) * last
                + symmetric_uniform(rng, config.history_noise) * config.history_noise_weight;
            last = last.clamp(config.history_min, config.history_max);

            points.push(HistoricalPoint {
                date: current,
                value: last,
            });

            match current.checked_add_signed(step) {
                Some(next) => current = next,
                None => break,
            }
        }

        debug!(
            bbox = %bbox.log_key(),
            start = %start,
            end = %end,
            points = points.len(),
            "Generated historical series"
        );

        Ok(points)
    }
}
