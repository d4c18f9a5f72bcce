//! Fuzz target for model.json parsing and validation.
//!
//! Arbitrary input must either be rejected with an error or produce a
//! registry that can rank a healthy panel without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tm_config::ModelConfig;
use tm_core::{ModelRegistry, PatientRecord};

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<ModelConfig>(data) else {
        return;
    };
    let Ok(registry) = ModelRegistry::new(config) else {
        return;
    };
    let record: PatientRecord = registry
        .markers()
        .iter()
        .filter_map(|m| registry.healthy(m).map(|g| (m.clone(), g.mean)))
        .collect();
    let _ = registry.scorer().rank(&record);
});
