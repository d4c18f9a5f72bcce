//! Core scoring P(C|x) for the tumor marker model.
//!
//! For every class the raw log-score is
//!
//! ```text
//! log P(C) + log N(x_S | mu_C, var_C) + sum_{m != S, m observed} log N(x_m | healthy_m)
//! ```
//!
//! where S is the class's signal marker. Everything stays in log space: with
//! variances up to 3.5e7 and readings in the thousands the raw densities
//! underflow long before the log densities lose precision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tm_math::bayes_factor::EvidenceStrength;
use tm_math::normalize_log_probs;
use tracing::{debug, trace, warn};

use crate::error::{ClassifyError, Result};
use crate::inference::ranking::{sort_ranking, ClassProbability, Prediction};
use crate::patient::{is_valid_level, PatientRecord};
use crate::registry::ModelRegistry;

/// Which part of the model an evidence term came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    /// Uniform class prior.
    Prior,
    /// The class's own signal marker under the class distribution.
    Signal,
    /// A non-signal marker under its healthy baseline.
    Healthy,
}

/// One additive contribution to a class's log-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceTerm {
    /// "prior" or the marker name.
    pub feature: String,
    pub kind: TermKind,
    /// The reading the term was evaluated at (None for the prior).
    pub value: Option<f64>,
    pub log_likelihood: f64,
}

/// Raw (unnormalized) log-score of one class, with its evidence ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub class: String,
    pub signal_marker: String,
    pub log_score: f64,
    pub terms: Vec<EvidenceTerm>,
}

/// Scores, normalizes and ranks patient records against a registry.
///
/// Holds only a shared reference to the immutable registry, so any number of
/// scorers can run concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    registry: &'a ModelRegistry,
}

impl<'a> Scorer<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a ModelRegistry {
        self.registry
    }

    /// Per-class log-scores with the full evidence breakdown, in registry
    /// class order.
    pub fn score_detailed(&self, patient: &PatientRecord) -> Result<Vec<ClassScore>> {
        self.check_readings(patient)?;

        let registry = self.registry;
        let log_prior = registry.log_prior();
        let mut scores = Vec::with_capacity(registry.class_count());

        for class in registry.classes() {
            let x_signal =
                patient
                    .get(&class.signal_marker)
                    .ok_or_else(|| ClassifyError::MissingSignalMarker {
                        class: class.id.clone(),
                        marker: class.signal_marker.clone(),
                    })?;

            let signal_term = class.signal.log_pdf(x_signal);
            let mut log_score = log_prior + signal_term;
            let mut terms = Vec::with_capacity(registry.markers().len() + 1);
            terms.push(EvidenceTerm {
                feature: "prior".to_string(),
                kind: TermKind::Prior,
                value: None,
                log_likelihood: log_prior,
            });
            terms.push(EvidenceTerm {
                feature: class.signal_marker.clone(),
                kind: TermKind::Signal,
                value: Some(x_signal),
                log_likelihood: signal_term,
            });

            for marker in registry.markers() {
                if *marker == class.signal_marker {
                    continue;
                }
                // Unobserved non-signal markers carry no evidence.
                let Some(x) = patient.get(marker) else {
                    continue;
                };
                let Some(baseline) = registry.healthy(marker) else {
                    continue;
                };
                let term = baseline.log_pdf(x);
                trace!(class = %class.id, marker = %marker, value = x, log_likelihood = term, "healthy term");
                log_score += term;
                terms.push(EvidenceTerm {
                    feature: marker.clone(),
                    kind: TermKind::Healthy,
                    value: Some(x),
                    log_likelihood: term,
                });
            }

            if !log_score.is_finite() {
                return Err(overflowed_score(&class.id, &terms));
            }

            debug!(class = %class.id, log_score, "class scored");
            scores.push(ClassScore {
                class: class.id.clone(),
                signal_marker: class.signal_marker.clone(),
                log_score,
                terms,
            });
        }

        Ok(scores)
    }

    /// Raw log-scores keyed by class id.
    pub fn score(&self, patient: &PatientRecord) -> Result<BTreeMap<String, f64>> {
        Ok(self
            .score_detailed(patient)?
            .into_iter()
            .map(|s| (s.class, s.log_score))
            .collect())
    }

    /// Normalized log posteriors keyed by class id.
    pub fn log_posteriors(&self, patient: &PatientRecord) -> Result<BTreeMap<String, f64>> {
        let scores = self.score_detailed(patient)?;
        let log_post = normalize(&scores)?;
        Ok(scores
            .into_iter()
            .zip(log_post)
            .map(|(s, lp)| (s.class, lp))
            .collect())
    }

    /// All classes ranked by posterior probability, highest first.
    ///
    /// Ties (bit-identical log posteriors) are broken by class id ascending.
    pub fn rank(&self, patient: &PatientRecord) -> Result<Vec<ClassProbability>> {
        let scores = self.score_detailed(patient)?;
        let log_post = normalize(&scores)?;

        let mut ranking: Vec<ClassProbability> = scores
            .into_iter()
            .zip(log_post)
            .map(|(s, log_posterior)| ClassProbability {
                class: s.class,
                probability: log_posterior.exp(),
                log_posterior,
            })
            .collect();
        sort_ranking(&mut ranking);
        Ok(ranking)
    }

    /// The top-ranked class plus the full ranking.
    pub fn predict(&self, patient: &PatientRecord) -> Result<Prediction> {
        let ranking = self.rank(patient)?;
        let top = ranking.first().ok_or_else(|| ClassifyError::Normalization {
            message: "model produced an empty ranking".to_string(),
        })?;

        // Uniform prior: posterior log odds equal the log Bayes factor.
        let log_odds_runner_up = ranking.get(1).map(|r| top.log_posterior - r.log_posterior);
        let strength = log_odds_runner_up
            .map(EvidenceStrength::from_log_bf)
            .unwrap_or(EvidenceStrength::Decisive);
        let class = top.class.clone();
        let probability = top.probability;

        Ok(Prediction {
            class,
            probability,
            log_odds_runner_up,
            strength,
            ranking,
        })
    }

    /// Reject readings that would poison the aggregate before any scoring.
    fn check_readings(&self, patient: &PatientRecord) -> Result<()> {
        for (marker, value) in patient.iter() {
            if !self.registry.is_known_marker(marker) {
                debug!(marker, "ignoring reading for unknown marker");
                continue;
            }
            if !is_valid_level(value) || !self.within_model_range(marker, value) {
                warn!(marker, value, "rejecting invalid marker reading");
                return Err(ClassifyError::InvalidReading {
                    marker: marker.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Every density the reading can enter must stay finite in log space.
    ///
    /// Readings far enough out square past f64 range and would give every
    /// class a -inf score.
    fn within_model_range(&self, marker: &str, value: f64) -> bool {
        let registry = self.registry;
        let healthy_ok = registry
            .healthy(marker)
            .map_or(true, |g| g.log_pdf(value).is_finite());
        healthy_ok
            && registry
                .classes()
                .iter()
                .filter(|c| c.signal_marker == marker)
                .all(|c| c.signal.log_pdf(value).is_finite())
    }
}

/// Blame the most extreme reading when several in-range terms sum past f64.
fn overflowed_score(class: &str, terms: &[EvidenceTerm]) -> ClassifyError {
    let worst = terms
        .iter()
        .filter_map(|t| t.value.map(|v| (t, v)))
        .min_by(|(a, _), (b, _)| a.log_likelihood.total_cmp(&b.log_likelihood));
    match worst {
        Some((term, value)) => {
            warn!(class, marker = %term.feature, value, "class log-score overflowed");
            ClassifyError::InvalidReading {
                marker: term.feature.clone(),
                value,
            }
        }
        None => ClassifyError::Normalization {
            message: format!("log-score of {} is not finite", class),
        },
    }
}

fn normalize(scores: &[ClassScore]) -> Result<Vec<f64>> {
    let raw: Vec<f64> = scores.iter().map(|s| s.log_score).collect();
    let log_post = normalize_log_probs(&raw);
    if log_post.iter().any(|v| v.is_nan()) {
        return Err(ClassifyError::Normalization {
            message: "normalization produced NaN".to_string(),
        });
    }
    Ok(log_post)
}
