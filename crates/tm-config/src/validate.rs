//! Configuration validation errors and semantic validation.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{GaussianParams, ModelConfig};

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },

    #[error("Model defines no {0}")]
    EmptyModel(&'static str),

    #[error("Duplicate class id: {class}")]
    DuplicateClass { class: String },

    #[error("Duplicate marker in vocabulary: {marker}")]
    DuplicateMarker { marker: String },

    #[error("Unknown marker {marker} referenced by {field}")]
    UnknownMarker { marker: String, field: String },

    #[error("Marker {marker} has no healthy baseline")]
    MissingHealthyBaseline { marker: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::VersionMismatch { .. } => 62,
            ValidationError::EmptyModel(_) => 63,
            ValidationError::DuplicateClass { .. } => 64,
            ValidationError::DuplicateMarker { .. } => 65,
            ValidationError::UnknownMarker { .. } => 66,
            ValidationError::MissingHealthyBaseline { .. } => 67,
            ValidationError::InvalidValue { .. } => 68,
        }
    }
}

/// Validate a model configuration semantically.
///
/// Checks, in order: schema version, non-empty vocabulary and class list,
/// vocabulary uniqueness, healthy baseline coverage, positive finite
/// variances, unique class ids, and that every signal marker is known.
pub fn validate_model(model: &ModelConfig) -> ValidationResult<()> {
    if model.schema_version != crate::MODEL_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::MODEL_SCHEMA_VERSION.to_string(),
            actual: model.schema_version.clone(),
        });
    }

    let vocabulary = model.marker_vocabulary();
    if vocabulary.is_empty() {
        return Err(ValidationError::EmptyModel("markers"));
    }
    if model.classes.is_empty() {
        return Err(ValidationError::EmptyModel("classes"));
    }

    let mut known = BTreeSet::new();
    for marker in &vocabulary {
        if marker.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "markers".to_string(),
                message: "marker names must be non-empty".to_string(),
            });
        }
        if !known.insert(marker.as_str()) {
            return Err(ValidationError::DuplicateMarker {
                marker: marker.clone(),
            });
        }
    }

    // Every known marker needs a healthy baseline, and nothing else may have one.
    for marker in &vocabulary {
        if !model.healthy.contains_key(marker) {
            return Err(ValidationError::MissingHealthyBaseline {
                marker: marker.clone(),
            });
        }
    }
    for (marker, params) in &model.healthy {
        if !known.contains(marker.as_str()) {
            return Err(ValidationError::UnknownMarker {
                marker: marker.clone(),
                field: "healthy".to_string(),
            });
        }
        validate_gaussian(&format!("healthy.{}", marker), params)?;
    }

    let mut seen = BTreeSet::new();
    for class in &model.classes {
        if class.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "classes.id".to_string(),
                message: "class ids must be non-empty".to_string(),
            });
        }
        if !seen.insert(class.id.as_str()) {
            return Err(ValidationError::DuplicateClass {
                class: class.id.clone(),
            });
        }
        if !known.contains(class.signal_marker.as_str()) {
            return Err(ValidationError::UnknownMarker {
                marker: class.signal_marker.clone(),
                field: format!("classes.{}.signal_marker", class.id),
            });
        }
        validate_gaussian(&format!("classes.{}.signal", class.id), &class.signal)?;
    }

    Ok(())
}

/// Validate Gaussian parameters: finite mean, finite variance > 0.
pub fn validate_gaussian(field: &str, params: &GaussianParams) -> ValidationResult<()> {
    if !params.mean.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: format!("{}.mean", field),
            message: format!("must be finite, got {}", params.mean),
        });
    }
    if !params.variance.is_finite() || params.variance <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{}.variance", field),
            message: format!("must be finite and > 0, got {}", params.variance),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassSpec;

    fn small_model() -> ModelConfig {
        let mut healthy = std::collections::BTreeMap::new();
        healthy.insert("A".to_string(), GaussianParams::new(1.0, 1.0));
        healthy.insert("B".to_string(), GaussianParams::new(2.0, 4.0));
        ModelConfig {
            schema_version: crate::MODEL_SCHEMA_VERSION.to_string(),
            description: None,
            markers: Vec::new(),
            healthy,
            classes: vec![
                ClassSpec::new("alpha", "A", GaussianParams::new(10.0, 9.0)),
                ClassSpec::new("beta", "B", GaussianParams::new(20.0, 16.0)),
            ],
        }
    }

    #[test]
    fn test_valid_model() {
        assert!(validate_model(&small_model()).is_ok());
    }

    #[test]
    fn test_gaussian_validation() {
        assert!(validate_gaussian("test", &GaussianParams::new(2.0, 5.0)).is_ok());
        assert!(validate_gaussian("test", &GaussianParams::new(2.0, 0.0)).is_err());
        assert!(validate_gaussian("test", &GaussianParams::new(2.0, -1.0)).is_err());
        assert!(validate_gaussian("test", &GaussianParams::new(f64::NAN, 1.0)).is_err());
        assert!(validate_gaussian("test", &GaussianParams::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_non_positive_class_variance() {
        let mut model = small_model();
        model.classes[0].signal.variance = 0.0;
        match validate_model(&model) {
            Err(ValidationError::InvalidValue { field, .. }) => {
                assert_eq!(field, "classes.alpha.signal.variance");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_signal_marker_must_be_known() {
        let mut model = small_model();
        model.classes[1].signal_marker = "C".to_string();
        assert!(matches!(
            validate_model(&model),
            Err(ValidationError::UnknownMarker { ref marker, .. }) if marker == "C"
        ));
    }

    #[test]
    fn test_vocabulary_marker_needs_baseline() {
        let mut model = small_model();
        model.markers = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert!(matches!(
            validate_model(&model),
            Err(ValidationError::MissingHealthyBaseline { ref marker }) if marker == "C"
        ));
    }

    #[test]
    fn test_baseline_outside_vocabulary() {
        let mut model = small_model();
        model.markers = vec!["A".to_string()];
        model.classes.truncate(1);
        assert!(matches!(
            validate_model(&model),
            Err(ValidationError::UnknownMarker { ref field, .. }) if field == "healthy"
        ));
    }

    #[test]
    fn test_duplicate_class() {
        let mut model = small_model();
        model.classes[1].id = "alpha".to_string();
        assert!(matches!(
            validate_model(&model),
            Err(ValidationError::DuplicateClass { .. })
        ));
    }

    #[test]
    fn test_empty_classes() {
        let mut model = small_model();
        model.classes.clear();
        let err = validate_model(&model).unwrap_err();
        assert_eq!(err.code(), 63);
        assert_eq!(err.to_string(), "Model defines no classes");
    }

    #[test]
    fn test_version_mismatch() {
        let mut model = small_model();
        model.schema_version = "0.9.0".to_string();
        assert!(matches!(
            validate_model(&model),
            Err(ValidationError::VersionMismatch { .. })
        ));
    }
}
