//! Tumor marker model configuration types.
//!
//! A model file describes the diagnostic classes (each tied to one signal
//! marker), the healthy-population baseline of every marker, and the marker
//! vocabulary readings are drawn from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Complete model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub schema_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Known marker vocabulary. When empty, the keys of `healthy` are used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,

    /// Healthy-population Gaussian per marker.
    pub healthy: BTreeMap<String, GaussianParams>,

    pub classes: Vec<ClassSpec>,
}

/// Normal distribution parameters: N(mean, variance).
/// Note: uses VARIANCE, not standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub variance: f64,

    #[serde(rename = "_comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl GaussianParams {
    pub fn new(mean: f64, variance: f64) -> Self {
        Self {
            mean,
            variance,
            comment: None,
        }
    }

    /// Build from a standard deviation instead of a variance.
    pub fn from_std_dev(mean: f64, std_dev: f64) -> Self {
        Self::new(mean, std_dev * std_dev)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// One diagnostic class and the distribution of its signal marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub id: String,
    pub signal_marker: String,
    pub signal: GaussianParams,
}

impl ClassSpec {
    pub fn new(id: impl Into<String>, signal_marker: impl Into<String>, signal: GaussianParams) -> Self {
        Self {
            id: id.into(),
            signal_marker: signal_marker.into(),
            signal,
        }
    }
}

impl ModelConfig {
    /// Load a model from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::validate::ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::validate::ValidationError::IoError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse a model from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, crate::validate::ValidationError> {
        serde_json::from_str(json).map_err(|e| {
            crate::validate::ValidationError::ParseError(format!("Invalid JSON: {}", e))
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The effective marker vocabulary.
    pub fn marker_vocabulary(&self) -> Vec<String> {
        if self.markers.is_empty() {
            self.healthy.keys().cloned().collect()
        } else {
            self.markers.clone()
        }
    }

    /// Look up a class by id.
    pub fn class(&self, id: &str) -> Option<&ClassSpec> {
        self.classes.iter().find(|c| c.id == id)
    }
}
