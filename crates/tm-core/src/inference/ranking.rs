//! Ranked classification output.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tm_math::bayes_factor::{delta_bits, EvidenceStrength};

/// Posterior probability of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub class: String,
    /// P(class | readings), in [0, 1].
    pub probability: f64,
    pub log_posterior: f64,
}

/// Top-1 class and the full ranking it was taken from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub probability: f64,
    /// Log posterior odds of the predicted class over the runner-up.
    /// None when the model has a single class.
    pub log_odds_runner_up: Option<f64>,
    /// Jeffreys-scale reading of `log_odds_runner_up`.
    pub strength: EvidenceStrength,
    pub ranking: Vec<ClassProbability>,
}

impl Prediction {
    /// The first `n` entries of the ranking.
    pub fn top(&self, n: usize) -> &[ClassProbability] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// Margin over the runner-up in bits.
    pub fn margin_bits(&self) -> Option<f64> {
        self.log_odds_runner_up.map(delta_bits)
    }

    /// Posterior probability of a class, if the class exists.
    pub fn probability_of(&self, class: &str) -> Option<f64> {
        self.ranking
            .iter()
            .find(|r| r.class == class)
            .map(|r| r.probability)
    }
}

/// Descending by log posterior, then class id ascending.
///
/// Log posteriors order exactly like probabilities but keep classes apart
/// whose probabilities both underflow to 0.0.
pub(crate) fn sort_ranking(ranking: &mut [ClassProbability]) {
    ranking.sort_by(compare_entries);
}

fn compare_entries(a: &ClassProbability, b: &ClassProbability) -> Ordering {
    b.log_posterior
        .total_cmp(&a.log_posterior)
        .then_with(|| a.class.cmp(&b.class))
}
