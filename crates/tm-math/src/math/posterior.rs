//! Posterior normalization in log space.

use super::stable::log_sum_exp;

/// Normalize unnormalized log-probabilities so that they exponentiate to a
/// distribution summing to one.
///
/// Returns `log p_i - log_sum_exp(log p)` for each entry. The result is all
/// NaN when the input contains NaN or when every entry is -inf (there is no
/// distribution to normalize).
pub fn normalize_log_probs(log_probs: &[f64]) -> Vec<f64> {
    let lse = log_sum_exp(log_probs);
    if !lse.is_finite() {
        return vec![f64::NAN; log_probs.len()];
    }
    log_probs.iter().map(|v| v - lse).collect()
}

/// Normalize unnormalized log-probabilities straight into probabilities.
pub fn posterior_probs(log_probs: &[f64]) -> Vec<f64> {
    normalize_log_probs(log_probs)
        .into_iter()
        .map(f64::exp)
        .collect()
}
