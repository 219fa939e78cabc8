//! Reference distributions: fitted normal and theoretical binomial.

use std::f64::consts::PI;

use crate::prob::normalized;

/// Mean and standard deviation of a discrete distribution over `centers`.
///
/// Both are 0.0 when the distribution carries no mass.
pub fn mean_std(centers: &[f64], probs: &[f64]) -> (f64, f64) {
    debug_assert_eq!(centers.len(), probs.len());

    let mass: f64 = probs.iter().sum();
    if mass <= 0.0 {
        return (0.0, 0.0);
    }

    let mu: f64 = centers.iter().zip(probs).map(|(c, p)| c * p).sum();
    let var: f64 = centers
        .iter()
        .zip(probs)
        .map(|(c, p)| (c - mu).powi(2) * p)
        .sum();
    (mu, var.sqrt())
}

/// Discretize a normal density at the given centers and renormalize.
///
/// Returns the all-zero array when `sigma` is not positive (no meaningful
/// reference exists for a zero-variance distribution).
pub fn normal_reference(centers: &[f64], mu: f64, sigma: f64) -> Vec<f64> {
    if sigma <= 0.0 {
        return vec![0.0; centers.len()];
    }

    let norm = 1.0 / (sigma * (2.0 * PI).sqrt());
    let pdf: Vec<f64> = centers
        .iter()
        .map(|c| norm * (-((c - mu).powi(2)) / (2.0 * sigma * sigma)).exp())
        .collect();

    normalized(&pdf).unwrap_or(pdf)
}

/// Binomial probability mass function over k = 0..=n.
pub fn binomial_pmf(n: usize, p: f64) -> Vec<f64> {
    let q = 1.0 - p;
    let mut pmf = Vec::with_capacity(n + 1);
    // C(n, k) built multiplicatively to stay exact for small n.
    let mut coeff = 1.0_f64;
    for k in 0..=n {
        pmf.push(coeff * p.powi(k as i32) * q.powi((n - k) as i32));
        coeff = coeff * (n - k) as f64 / (k + 1) as f64;
    }
    pmf
}
