//! Fuzz target for scoring arbitrary patient panels against the builtin model.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tm_core::{ModelRegistry, PatientRecord};

#[derive(Debug, Arbitrary)]
struct Panel {
    he4: Option<f64>,
    afp: Option<f64>,
    ca19_9: Option<f64>,
    extra: Vec<(String, f64)>,
}

fuzz_target!(|panel: Panel| {
    let Ok(registry) = ModelRegistry::builtin() else {
        return;
    };
    let mut record: PatientRecord = panel.extra.into_iter().collect();
    for (marker, value) in [("HE4", panel.he4), ("AFP", panel.afp), ("CA19-9", panel.ca19_9)] {
        if let Some(value) = value {
            record.insert(marker, value);
        }
    }

    if let Ok(ranking) = registry.scorer().rank(&record) {
        let sum: f64 = ranking.iter().map(|r| r.probability).sum();
        assert!((sum - 1.0).abs() < 1e-6, "posterior sum {sum}");
    }
});
