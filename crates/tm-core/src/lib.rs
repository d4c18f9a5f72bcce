//! Tumor Marker Triage Core Library
//!
//! Naive Bayes classification of tumor marker panels:
//! - Immutable model registry built from a validated model configuration
//! - Log-space scoring with per-class signal markers and healthy baselines
//! - Log-sum-exp normalization and deterministic ranking
//! - Structured error taxonomy and logging
//!
//! ```
//! use tm_core::{ModelRegistry, PatientRecord};
//!
//! let registry = ModelRegistry::builtin()?;
//! let patient = PatientRecord::new()
//!     .with("HE4", 180.0)
//!     .with("AFP", 6.0)
//!     .with("CA19-9", 22.0);
//! let prediction = registry.scorer().predict(&patient)?;
//! assert_eq!(prediction.class, "Ovarian_Early");
//! # Ok::<(), tm_core::ClassifyError>(())
//! ```

pub mod error;
pub mod inference;
pub mod logging;
pub mod patient;
pub mod registry;

pub use error::{ClassifyError, ErrorCategory, Result};
pub use inference::{
    fill_missing_with_healthy_means, ClassProbability, ClassScore, EvidenceTerm, Prediction,
    Scorer, TermKind,
};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use patient::{MarkerReading, PatientRecord};
pub use registry::{ClassDefinition, Gaussian, ModelRegistry};
