//! Bayesian inference over tumor marker panels.
//!
//! Scoring accumulates log-likelihoods per class, normalization uses
//! log-sum-exp, and ranking orders classes by posterior probability.

pub mod fill;
pub mod ranking;
pub mod scorer;

pub use fill::fill_missing_with_healthy_means;
pub use ranking::{ClassProbability, Prediction};
pub use scorer::{ClassScore, EvidenceTerm, Scorer, TermKind};
