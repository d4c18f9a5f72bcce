//! Shared helpers for tm-core integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tm_config::{ClassSpec, GaussianParams, ModelConfig, MODEL_SCHEMA_VERSION};
use tm_core::{ModelRegistry, PatientRecord};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test")
        .join("fixtures")
        .join("model")
}

pub fn builtin() -> ModelRegistry {
    ModelRegistry::builtin().expect("builtin model is valid")
}

/// Markers X, Y, Z with healthy N(0, 1); one class per marker with N(10, 4).
pub fn synthetic_registry() -> ModelRegistry {
    let markers = ["X", "Y", "Z"];
    let mut healthy = BTreeMap::new();
    for marker in markers {
        healthy.insert(marker.to_string(), GaussianParams::new(0.0, 1.0));
    }
    let classes = markers
        .iter()
        .map(|m| ClassSpec::new(format!("{}_high", m.to_lowercase()), *m, GaussianParams::new(10.0, 4.0)))
        .collect();
    ModelRegistry::new(ModelConfig {
        schema_version: MODEL_SCHEMA_VERSION.to_string(),
        description: Some("synthetic three marker model".to_string()),
        markers: markers.iter().map(|m| m.to_string()).collect(),
        healthy,
        classes,
    })
    .expect("synthetic model is valid")
}

pub fn patient(he4: f64, afp: f64, ca19_9: f64) -> PatientRecord {
    PatientRecord::new()
        .with("HE4", he4)
        .with("AFP", afp)
        .with("CA19-9", ca19_9)
}

/// The builtin model's healthy means for every marker.
pub fn healthy_patient() -> PatientRecord {
    patient(60.0, 5.0, 20.0)
}
