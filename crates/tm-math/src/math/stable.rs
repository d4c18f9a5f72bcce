//! Log-domain accumulation helpers.
//!
//! Class log-scores for extreme marker readings sit in the thousands below
//! zero; exponentiating them directly gives 0.0 for every class.

/// log(sum(exp(values))) computed relative to the largest entry.
///
/// Empty input and all -inf input give -inf. Any NaN gives NaN, and a +inf
/// entry gives +inf.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let peak = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !peak.is_finite() {
        // -inf covers the empty case too.
        return peak;
    }
    let shifted: f64 = values.iter().map(|v| (v - peak).exp()).sum();
    peak + shifted.ln()
}

/// log(exp(a) + exp(b)) for two terms.
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if lo == f64::NEG_INFINITY || hi == f64::INFINITY {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        !a.is_nan() && !b.is_nan() && (a - b).abs() <= tol
    }

    #[test]
    fn equal_terms_add_ln_n() {
        assert!(close(log_sum_exp(&[-7.0; 4]), -7.0 + 4f64.ln(), 1e-12));
    }

    #[test]
    fn small_terms_vanish_next_to_large_one() {
        assert!(close(log_sum_exp(&[-900.0, -2.0, -1500.0]), -2.0, 1e-12));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        assert_eq!(log_sum_exp(&[f64::NEG_INFINITY; 3]), f64::NEG_INFINITY);
        assert_eq!(log_sum_exp(&[1.0, f64::INFINITY]), f64::INFINITY);
        assert!(log_sum_exp(&[0.0, f64::NAN]).is_nan());
    }

    #[test]
    fn very_negative_scores_stay_finite() {
        let v = [-12_000.0, -12_001.0, -12_050.0];
        let out = log_sum_exp(&v);
        assert!(out.is_finite());
        let expected = -12_000.0 + (1.0 + (-1.0f64).exp() + (-50.0f64).exp()).ln();
        assert!(close(out, expected, 1e-9));
    }

    #[test]
    fn pairwise_form_agrees() {
        for (a, b) in [(1.234, -0.75), (-3000.0, -3002.5), (0.0, 0.0)] {
            assert!(close(log_add_exp(a, b), log_sum_exp(&[a, b]), 1e-12));
            assert!(close(log_add_exp(a, b), log_add_exp(b, a), 0.0));
        }
    }

    #[test]
    fn neg_inf_is_the_identity() {
        assert_eq!(log_add_exp(f64::NEG_INFINITY, -3.5), -3.5);
        assert_eq!(log_add_exp(2.0, f64::NEG_INFINITY), 2.0);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
