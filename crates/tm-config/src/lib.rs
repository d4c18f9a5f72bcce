//! Tumor marker model configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for model.json (classes, healthy baselines, markers)
//! - Semantic validation of the model invariants
//! - The builtin tumor marker preset
//! - Model file resolution (explicit path → env → XDG → system → builtin)
//! - Model snapshots for reproducibility

pub mod load;
pub mod model;
pub mod preset;
pub mod resolve;
pub mod snapshot;
pub mod validate;

pub use load::{load_model, load_model_file, LoadedModel};
pub use model::{ClassSpec, GaussianParams, ModelConfig};
pub use resolve::{resolve_model_path, ConfigSource, ModelPath};
pub use snapshot::ModelSnapshot;
pub use validate::{validate_model, ValidationError, ValidationResult};

/// Schema version for model files.
pub const MODEL_SCHEMA_VERSION: &str = "1.0.0";
