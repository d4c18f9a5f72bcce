//! Gaussian (normal) distribution utilities.
//!
//! Densities are evaluated in log space only. Variances in the tumor marker
//! model reach 10^7 and readings can sit thousands of units from a mean, so
//! the raw density routinely underflows where the log density is still a
//! well-behaved finite number.

use std::f64::consts::PI;

/// Log of the normal PDF N(mean, variance) at x.
///
/// `log N(x | mu, var) = -0.5 * (ln(2 pi var) + (x - mu)^2 / var)`
///
/// Returns NaN for NaN inputs or a non-positive variance, and -inf once
/// the squared distance from the mean leaves f64 range.
pub fn log_normal_pdf(x: f64, mean: f64, variance: f64) -> f64 {
    if x.is_nan() || mean.is_nan() || variance.is_nan() {
        return f64::NAN;
    }
    if variance <= 0.0 || variance.is_infinite() {
        return f64::NAN;
    }
    let diff = x - mean;
    -0.5 * ((2.0 * PI * variance).ln() + diff * diff / variance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn standard_normal_at_zero() {
        let expected = -0.5 * (2.0 * PI).ln();
        assert!(approx_eq(log_normal_pdf(0.0, 0.0, 1.0), expected, 1e-12));
    }

    #[test]
    fn matches_closed_form_density() {
        // N(3 | 1, 4) = exp(-0.5) / sqrt(8 pi)
        let expected = (-0.5f64).exp() / (8.0 * PI).sqrt();
        assert!(approx_eq(log_normal_pdf(3.0, 1.0, 4.0).exp(), expected, 1e-12));
    }

    #[test]
    fn symmetric_about_mean() {
        let left = log_normal_pdf(60.0 - 7.5, 60.0, 225.0);
        let right = log_normal_pdf(60.0 + 7.5, 60.0, 225.0);
        assert!(approx_eq(left, right, 1e-12));
    }

    #[test]
    fn far_tail_stays_finite_in_log_space() {
        // AFP of 6000 against the healthy baseline N(5, 9).
        let log_p = log_normal_pdf(6_000.0, 5.0, 9.0);
        assert!(log_p.is_finite());
        assert!(log_p < -1.0e6);
        assert_eq!(log_p.exp(), 0.0);
    }

    #[test]
    fn wide_variance_is_finite() {
        let log_p = log_normal_pdf(6_000.0, 6_000.0, 1.5e7);
        assert!(approx_eq(log_p, -0.5 * (2.0 * PI * 1.5e7).ln(), 1e-12));
    }

    #[test]
    fn rejects_non_positive_variance() {
        assert!(log_normal_pdf(1.0, 0.0, 0.0).is_nan());
        assert!(log_normal_pdf(1.0, 0.0, -2.0).is_nan());
        assert!(log_normal_pdf(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn squared_distance_overflow_is_neg_inf() {
        assert!(log_normal_pdf(1e150, 5.0, 9.0).is_finite());
        assert_eq!(log_normal_pdf(1e160, 5.0, 9.0), f64::NEG_INFINITY);
    }
}
