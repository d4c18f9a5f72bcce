//! Patient records: marker name to measured level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single marker measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerReading {
    pub marker: String,
    pub value: f64,
}

impl MarkerReading {
    pub fn new(marker: impl Into<String>, value: f64) -> Self {
        Self {
            marker: marker.into(),
            value,
        }
    }

    /// Levels are concentrations: finite and non-negative.
    pub fn is_valid(&self) -> bool {
        is_valid_level(self.value)
    }
}

pub(crate) fn is_valid_level(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Marker readings for one patient.
///
/// Absent markers are allowed; they simply contribute no evidence. Readings
/// are kept in marker-name order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientRecord {
    readings: BTreeMap<String, f64>,
}

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, marker: impl Into<String>, value: f64) -> Self {
        self.readings.insert(marker.into(), value);
        self
    }

    /// Insert or replace a reading, returning the previous value.
    pub fn insert(&mut self, marker: impl Into<String>, value: f64) -> Option<f64> {
        self.readings.insert(marker.into(), value)
    }

    pub fn remove(&mut self, marker: &str) -> Option<f64> {
        self.readings.remove(marker)
    }

    pub fn get(&self, marker: &str) -> Option<f64> {
        self.readings.get(marker).copied()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.readings.contains_key(marker)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.readings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn readings(&self) -> impl Iterator<Item = MarkerReading> + '_ {
        self.readings
            .iter()
            .map(|(marker, value)| MarkerReading::new(marker.clone(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PatientRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl FromIterator<MarkerReading> for PatientRecord {
    fn from_iter<I: IntoIterator<Item = MarkerReading>>(iter: I) -> Self {
        iter.into_iter().map(|r| (r.marker, r.value)).collect()
    }
}

impl From<BTreeMap<String, f64>> for PatientRecord {
    fn from(readings: BTreeMap<String, f64>) -> Self {
        Self { readings }
    }
}
