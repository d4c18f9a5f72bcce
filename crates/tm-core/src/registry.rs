//! Immutable model registry.
//!
//! Holds the class definitions, the healthy baseline per marker and the
//! marker vocabulary. A registry can only be obtained from a configuration
//! that passed validation, so the scorer never has to re-check variances or
//! baseline coverage.

use std::collections::BTreeMap;
use std::path::Path;

use tm_config::{load_model, load_model_file, LoadedModel, ModelConfig, ModelSnapshot};
use tm_math::log_normal_pdf;
use tracing::info;

use crate::error::Result;
use crate::inference::Scorer;

/// Validated Gaussian parameters (variance > 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub mean: f64,
    pub variance: f64,
}

impl Gaussian {
    pub fn log_pdf(&self, x: f64) -> f64 {
        log_normal_pdf(x, self.mean, self.variance)
    }
}

impl From<&tm_config::GaussianParams> for Gaussian {
    fn from(params: &tm_config::GaussianParams) -> Self {
        Self {
            mean: params.mean,
            variance: params.variance,
        }
    }
}

/// One diagnostic class: its signal marker and that marker's distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    pub id: String,
    pub signal_marker: String,
    pub signal: Gaussian,
}

/// Immutable table of classes, healthy baselines and known markers.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    classes: Vec<ClassDefinition>,
    healthy: BTreeMap<String, Gaussian>,
    markers: Vec<String>,
    log_prior: f64,
    snapshot: ModelSnapshot,
}

impl ModelRegistry {
    /// Build a registry from an in-memory model, validating it first.
    pub fn new(config: ModelConfig) -> Result<Self> {
        tm_config::validate_model(&config)?;
        let snapshot = ModelSnapshot::in_memory(&config);
        Ok(Self::from_validated(&config, snapshot))
    }

    /// Registry for the builtin HE4 / AFP / CA19-9 model.
    pub fn builtin() -> Result<Self> {
        Self::new(tm_config::preset::builtin_model())
    }

    /// Load a model file from an explicit path.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::from_loaded(load_model_file(path)?))
    }

    /// Resolve the model (explicit path, env, XDG, system, builtin) and load it.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Ok(Self::from_loaded(load_model(explicit)?))
    }

    /// Wrap an already loaded and validated model.
    pub fn from_loaded(loaded: LoadedModel) -> Self {
        Self::from_validated(&loaded.model, loaded.snapshot)
    }

    fn from_validated(config: &ModelConfig, snapshot: ModelSnapshot) -> Self {
        let classes: Vec<ClassDefinition> = config
            .classes
            .iter()
            .map(|c| ClassDefinition {
                id: c.id.clone(),
                signal_marker: c.signal_marker.clone(),
                signal: Gaussian::from(&c.signal),
            })
            .collect();
        let healthy = config
            .healthy
            .iter()
            .map(|(marker, params)| (marker.clone(), Gaussian::from(params)))
            .collect();
        let log_prior = -(classes.len() as f64).ln();

        info!(
            classes = classes.len(),
            markers = snapshot.marker_count,
            model_id = snapshot.short_id(),
            "model registry ready"
        );

        Self {
            classes,
            healthy,
            markers: config.marker_vocabulary(),
            log_prior,
            snapshot,
        }
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn class(&self, id: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Healthy-population parameters for a marker.
    pub fn healthy(&self, marker: &str) -> Option<&Gaussian> {
        self.healthy.get(marker)
    }

    /// Known marker vocabulary, in configuration order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn is_known_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Uniform log prior, -ln(number of classes).
    pub fn log_prior(&self) -> f64 {
        self.log_prior
    }

    /// Provenance of the model this registry was built from.
    pub fn snapshot(&self) -> &ModelSnapshot {
        &self.snapshot
    }

    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(self)
    }
}
