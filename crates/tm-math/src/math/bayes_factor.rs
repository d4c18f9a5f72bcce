//! Bayes factor utilities for explaining how decisive a ranking is.
//!
//! Under a uniform class prior the log posterior odds between two classes is
//! exactly their log Bayes factor, so the gap between the top-ranked class and
//! the runner-up can be read on the Jeffreys scale.

use serde::{Deserialize, Serialize};

/// Convert log Bayes factor to evidence in bits.
///
/// Returns NaN if input is NaN.
pub fn delta_bits(log_bf: f64) -> f64 {
    if log_bf.is_nan() {
        return f64::NAN;
    }
    log_bf / std::f64::consts::LN_2
}

/// Evidence strength on the Jeffreys scale.
///
/// Labels are for presentation only; the raw log Bayes factor is always
/// kept alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    /// |log_bf| == 0
    None,
    /// 0 < |log_bf| < ln(3.2)
    Anecdotal,
    /// ln(3.2) <= |log_bf| < ln(10)
    Substantial,
    /// ln(10) <= |log_bf| < ln(32)
    Strong,
    /// ln(32) <= |log_bf| < ln(100)
    VeryStrong,
    /// |log_bf| >= ln(100)
    Decisive,
}

impl EvidenceStrength {
    /// Classify evidence strength from a log Bayes factor (sign ignored).
    pub fn from_log_bf(log_bf: f64) -> Self {
        if log_bf.is_nan() {
            return EvidenceStrength::None;
        }

        let abs_log_bf = log_bf.abs();

        const LN_3_2: f64 = 1.163_150_809_678_64;
        const LN_32: f64 = 3.465_735_902_799_727;
        const LN_100: f64 = 4.605_170_185_988_092;
        let ln_10 = std::f64::consts::LN_10;

        if abs_log_bf < LN_3_2 {
            if abs_log_bf < f64::EPSILON {
                EvidenceStrength::None
            } else {
                EvidenceStrength::Anecdotal
            }
        } else if abs_log_bf < ln_10 {
            EvidenceStrength::Substantial
        } else if abs_log_bf < LN_32 {
            EvidenceStrength::Strong
        } else if abs_log_bf < LN_100 {
            EvidenceStrength::VeryStrong
        } else {
            EvidenceStrength::Decisive
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            EvidenceStrength::None => "none",
            EvidenceStrength::Anecdotal => "anecdotal",
            EvidenceStrength::Substantial => "substantial",
            EvidenceStrength::Strong => "strong",
            EvidenceStrength::VeryStrong => "very strong",
            EvidenceStrength::Decisive => "decisive",
        }
    }
}

impl std::fmt::Display for EvidenceStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
