//! Error types for tumor marker classification.
//!
//! Every error carries a stable numeric code and a category so callers can
//! tell a broken model (fatal, raised once at startup) from a malformed
//! patient record (per request, never retried).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tm_config::ValidationError;

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Model configuration violated a registry invariant.
    Config,
    /// The patient record cannot be classified as given.
    Input,
    /// Numerical failure inside scoring or normalization.
    Inference,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Inference => write!(f, "inference"),
        }
    }
}

/// Errors raised while building a registry or classifying a patient.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ValidationError),

    #[error("class {class} requires a reading for signal marker {marker}")]
    MissingSignalMarker { class: String, marker: String },

    #[error("invalid reading for {marker}: {value} (expected a finite, non-negative level within the model's range)")]
    InvalidReading { marker: String, value: f64 },

    #[error("posterior normalization failed: {message}")]
    Normalization { message: String },
}

impl ClassifyError {
    /// Stable error code for machine parsing.
    pub fn code(&self) -> u32 {
        match self {
            ClassifyError::Configuration(inner) => inner.code(),
            ClassifyError::MissingSignalMarker { .. } => 20,
            ClassifyError::InvalidReading { .. } => 21,
            ClassifyError::Normalization { .. } => 30,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClassifyError::Configuration(_) => ErrorCategory::Config,
            ClassifyError::MissingSignalMarker { .. } | ClassifyError::InvalidReading { .. } => {
                ErrorCategory::Input
            }
            ClassifyError::Normalization { .. } => ErrorCategory::Inference,
        }
    }

    /// Whether a caller can succeed by correcting its input and retrying.
    ///
    /// Configuration errors are fatal; the registry must be rebuilt.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_signal_marker_display() {
        let err = ClassifyError::MissingSignalMarker {
            class: "Liver_Stage_I".to_string(),
            marker: "AFP".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "class Liver_Stage_I requires a reading for signal marker AFP"
        );
        assert_eq!(err.code(), 20);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_reading_display() {
        let err = ClassifyError::InvalidReading {
            marker: "HE4".to_string(),
            value: f64::NAN,
        };
        assert!(err.to_string().contains("invalid reading for HE4: NaN"));
        assert_eq!(err.code(), 21);
    }

    #[test]
    fn configuration_error_keeps_validation_code() {
        let err: ClassifyError = ValidationError::DuplicateClass {
            class: "Ovarian_Early".to_string(),
        }
        .into();
        assert_eq!(err.code(), 64);
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn category_display() {
        assert_eq!(ErrorCategory::Config.to_string(), "config");
        assert_eq!(ErrorCategory::Input.to_string(), "input");
        assert_eq!(ErrorCategory::Inference.to_string(), "inference");
    }
}
