//! Explicit lenient adapter for incomplete patient records.
//!
//! The scorer refuses to guess a missing signal marker. Callers that want
//! the older "assume average" behavior must opt in here, and get back a new
//! record that says exactly what was assumed.

use tracing::debug;

use crate::patient::PatientRecord;
use crate::registry::ModelRegistry;

/// Return a copy of `patient` where every known marker without a reading
/// is set to its healthy-population mean.
///
/// Existing readings (including invalid ones) are left untouched so that
/// the scorer still rejects them.
pub fn fill_missing_with_healthy_means(
    patient: &PatientRecord,
    registry: &ModelRegistry,
) -> PatientRecord {
    let mut filled = patient.clone();
    for marker in registry.markers() {
        if filled.contains(marker) {
            continue;
        }
        if let Some(baseline) = registry.healthy(marker) {
            debug!(marker = %marker, value = baseline.mean, "filling missing marker with healthy mean");
            filled.insert(marker.clone(), baseline.mean);
        }
    }
    filled
}
