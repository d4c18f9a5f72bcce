//! Builtin model presets.
//!
//! The tumor marker preset covers three markers (HE4, AFP, CA19-9) and ten
//! ovarian, liver and pancreatic classes. Stage-specific classes carry the
//! wide variances reported for late-stage disease, up to 3.5e7 for CA19-9.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ClassSpec, GaussianParams, ModelConfig};

pub const MARKER_HE4: &str = "HE4";
pub const MARKER_AFP: &str = "AFP";
pub const MARKER_CA19_9: &str = "CA19-9";

/// Available model presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetName {
    /// HE4 / AFP / CA19-9 model for ovarian, liver and pancreatic cancer.
    TumorMarkers,
}

impl PresetName {
    /// All available preset names.
    pub const ALL: &'static [PresetName] = &[PresetName::TumorMarkers];

    /// Get preset name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::TumorMarkers => "tumor_markers",
        }
    }

    /// Parse preset name from string.
    pub fn parse(s: &str) -> Option<PresetName> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "tumor_markers" | "tumor" | "default" | "builtin" => Some(PresetName::TumorMarkers),
            _ => None,
        }
    }

    /// Get a description of the preset.
    pub fn description(&self) -> &'static str {
        match self {
            PresetName::TumorMarkers => {
                "HE4, AFP and CA19-9 signal markers for ovarian, liver and pancreatic cancer stages"
            }
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresetName {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::parse(s).ok_or_else(|| PresetError::UnknownPreset(s.to_string()))
    }
}

/// Errors from preset lookup.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Summary of a preset for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: PresetName,
    pub description: String,
    pub class_count: usize,
    pub marker_count: usize,
}

/// Get the model for a preset.
pub fn get_preset(name: PresetName) -> ModelConfig {
    match name {
        PresetName::TumorMarkers => tumor_marker_model(),
    }
}

/// List all presets with summaries.
pub fn list_presets() -> Vec<PresetInfo> {
    PresetName::ALL
        .iter()
        .map(|name| {
            let model = get_preset(*name);
            PresetInfo {
                name: *name,
                description: name.description().to_string(),
                class_count: model.classes.len(),
                marker_count: model.marker_vocabulary().len(),
            }
        })
        .collect()
}

/// The builtin model used when no model file is configured.
pub fn builtin_model() -> ModelConfig {
    get_preset(PresetName::TumorMarkers)
}

fn tumor_marker_model() -> ModelConfig {
    let mut healthy = BTreeMap::new();
    healthy.insert(MARKER_HE4.to_string(), GaussianParams::from_std_dev(60.0, 15.0));
    healthy.insert(MARKER_AFP.to_string(), GaussianParams::from_std_dev(5.0, 3.0));
    healthy.insert(MARKER_CA19_9.to_string(), GaussianParams::from_std_dev(20.0, 10.0));

    let class = |id: &str, marker: &str, mean: f64, variance: f64| {
        ClassSpec::new(id, marker, GaussianParams::new(mean, variance))
    };

    ModelConfig {
        schema_version: crate::MODEL_SCHEMA_VERSION.to_string(),
        description: Some(PresetName::TumorMarkers.description().to_string()),
        markers: vec![
            MARKER_HE4.to_string(),
            MARKER_AFP.to_string(),
            MARKER_CA19_9.to_string(),
        ],
        healthy,
        classes: vec![
            class("Ovarian_Early", MARKER_HE4, 151.0, 6_348.0),
            class("Ovarian_Late", MARKER_HE4, 570.0, 84_840.0),
            class("Liver_Overall", MARKER_AFP, 450.0, 2_250_000.0),
            class("Liver_Stage_I", MARKER_AFP, 100.0, 7_500.0),
            class("Liver_Stage_II_III", MARKER_AFP, 600.0, 450_000.0),
            class("Liver_Stage_IV", MARKER_AFP, 6_000.0, 15_000_000.0),
            class("Pancreatic_Overall", MARKER_CA19_9, 1_750.0, 3_500_000.0),
            class("Pancreatic_Stage_I", MARKER_CA19_9, 140.0, 17_500.0),
            class("Pancreatic_Stage_II_III", MARKER_CA19_9, 950.0, 750_000.0),
            class("Pancreatic_Stage_IV", MARKER_CA19_9, 12_500.0, 35_000_000.0),
        ],
    }
}
