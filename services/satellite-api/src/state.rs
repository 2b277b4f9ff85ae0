//! Application state for the satellite API.

use std::sync::{Mutex, PoisonError};

use metrics_exporter_prometheus::PrometheusHandle;
use ndvi_generator::{MockIndexGenerator, PlaceholderImageResolver};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ServiceConfig;

/// Where request handlers get their randomness from.
pub enum RngSource {
    /// Fresh entropy-seeded generator per request.
    Entropy,

    /// One shared generator, for reproducible runs.
    Seeded(Mutex<StdRng>),
}

impl RngSource {
    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => RngSource::Entropy,
        }
    }

    /// Run `f` with a generator from this source.
    ///
    /// The shared generator stays locked for the duration of `f`, which must
    /// not await.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        match self {
            RngSource::Entropy => {
                let mut rng = StdRng::from_entropy();
                f(&mut rng)
            }
            RngSource::Seeded(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, RngSource::Seeded(_))
    }
}

/// Shared application state.
pub struct AppState {
    /// Synthetic NDVI generator and placeholder image resolver.
    pub generator: MockIndexGenerator,

    /// Randomness for the generator.
    pub rng: RngSource,

    /// Prometheus render handle, when a recorder was installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from loaded configuration.
    pub fn new(config: ServiceConfig, seed: Option<u64>) -> Self {
        let generator = MockIndexGenerator::new(
            config.generator,
            PlaceholderImageResolver::new(config.imagery),
        );

        Self {
            generator,
            rng: RngSource::from_seed(seed),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the /metrics endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
