//! Model loading: resolve, read, parse, validate.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::model::ModelConfig;
use crate::preset::builtin_model;
use crate::resolve::{resolve_model_path, ConfigSource, ModelPath};
use crate::snapshot::ModelSnapshot;
use crate::validate::{validate_model, ValidationError, ValidationResult};

/// A validated model together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: ModelConfig,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
    pub snapshot: ModelSnapshot,
}

/// Resolve and load the model, falling back to the builtin preset.
///
/// The result is always semantically validated.
pub fn load_model(explicit: Option<&Path>) -> ValidationResult<LoadedModel> {
    let resolved = resolve_model_path(explicit);

    let (model, raw) = match &resolved.path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
            })?;
            (ModelConfig::from_str(&raw)?, Some(raw))
        }
        None => {
            debug!("no model file found; using builtin preset");
            (builtin_model(), None)
        }
    };

    validate_model(&model)?;
    Ok(finish(model, resolved, raw.as_deref()))
}

/// Load and validate a model from an explicit file, without fallback.
pub fn load_model_file(path: &Path) -> ValidationResult<LoadedModel> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let model = ModelConfig::from_str(&raw)?;
    validate_model(&model)?;
    let resolved = ModelPath {
        path: Some(path.to_path_buf()),
        source: ConfigSource::Explicit,
    };
    Ok(finish(model, resolved, Some(&raw)))
}

fn finish(model: ModelConfig, resolved: ModelPath, raw: Option<&str>) -> LoadedModel {
    let snapshot = ModelSnapshot::new(&model, &resolved, raw);
    info!(
        source = %resolved.source,
        classes = model.classes.len(),
        model_id = snapshot.short_id(),
        "loaded tumor marker model"
    );
    LoadedModel {
        model,
        path: resolved.path,
        source: resolved.source,
        snapshot,
    }
}
