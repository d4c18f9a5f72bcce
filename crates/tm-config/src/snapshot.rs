//! Model snapshots for reproducibility.
//!
//! A snapshot captures exactly which model a classifier was built from, so
//! rankings can be traced back to the parameters that produced them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::ModelConfig;
use crate::resolve::ModelPath;

/// A frozen snapshot of model configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Schema version of the model.
    pub schema_version: String,

    /// SHA-256 of the model file content, or of the canonical JSON for
    /// in-memory models.
    pub model_hash: String,

    /// Path where the model was loaded from.
    #[serde(default)]
    pub model_path: Option<String>,

    /// Source of the model configuration.
    pub model_source: String,

    pub class_count: usize,
    pub marker_count: usize,
    pub markers: Vec<String>,
}

impl ModelSnapshot {
    /// Create a snapshot of a loaded model.
    ///
    /// `raw_json` is the file content when the model came from disk.
    pub fn new(model: &ModelConfig, path: &ModelPath, raw_json: Option<&str>) -> Self {
        let model_hash = match raw_json {
            Some(content) => hash_content(content),
            None => hash_content(&canonical_json(model)),
        };
        let markers = model.marker_vocabulary();

        ModelSnapshot {
            timestamp: Utc::now(),
            schema_version: model.schema_version.clone(),
            model_hash,
            model_path: path.path.as_ref().map(|p| p.display().to_string()),
            model_source: path.source.to_string(),
            class_count: model.classes.len(),
            marker_count: markers.len(),
            markers,
        }
    }

    /// Snapshot of an in-memory model that was never resolved from disk.
    pub fn in_memory(model: &ModelConfig) -> Self {
        Self::new(model, &ModelPath::default(), None)
    }

    /// Serialize snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if this snapshot describes the same model as another.
    pub fn matches(&self, other: &ModelSnapshot) -> bool {
        self.model_hash == other.model_hash
    }

    /// Get a short identifier for this snapshot (first 12 chars of hash).
    pub fn short_id(&self) -> &str {
        &self.model_hash[..12.min(self.model_hash.len())]
    }
}

fn canonical_json(model: &ModelConfig) -> String {
    serde_json::to_string(model).unwrap_or_default()
}

/// Hash content with SHA-256 and return hex string.
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::builtin_model;
    use crate::resolve::ConfigSource;

    #[test]
    fn test_in_memory_snapshot() {
        let snapshot = ModelSnapshot::in_memory(&builtin_model());
        assert_eq!(snapshot.schema_version, crate::MODEL_SCHEMA_VERSION);
        assert_eq!(snapshot.class_count, 10);
        assert_eq!(snapshot.marker_count, 3);
        assert_eq!(snapshot.model_source, ConfigSource::BuiltinDefault.to_string());
        assert!(snapshot.model_path.is_none());
    }

    #[test]
    fn test_snapshot_short_id() {
        let snapshot = ModelSnapshot::in_memory(&builtin_model());
        assert_eq!(snapshot.short_id().len(), 12);
    }

    #[test]
    fn test_snapshot_matches() {
        let s1 = ModelSnapshot::in_memory(&builtin_model());
        let s2 = ModelSnapshot::in_memory(&builtin_model());
        assert!(s1.matches(&s2));

        let mut changed = builtin_model();
        changed.classes[0].signal.mean += 1.0;
        let s3 = ModelSnapshot::in_memory(&changed);
        assert!(!s1.matches(&s3));
    }

    #[test]
    fn test_hash_content() {
        let hash1 = hash_content("test");
        let hash2 = hash_content("test");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snapshot = ModelSnapshot::in_memory(&builtin_model());
        let json = snapshot.to_json().unwrap();
        let restored = ModelSnapshot::from_json(&json).unwrap();
        assert!(snapshot.matches(&restored));
        assert_eq!(restored.markers, snapshot.markers);
    }
}
