//! Divergence metrics between probability distributions.
//!
//! All three metrics return `None` when either input carries no mass; a
//! number produced from a degenerate distribution would be meaningless.

use crate::prob::normalized;

/// Offset added to both inputs of [`kl_divergence`] before taking logs.
const KL_OFFSET: f64 = 1e-12;

/// Total variation distance: ½·Σ|p − q| after renormalizing both inputs.
///
/// Bounded in [0, 1]; symmetric. `None` when the inputs differ in length.
pub fn total_variation(p: &[f64], q: &[f64]) -> Option<f64> {
    if p.len() != q.len() {
        return None;
    }
    let p = normalized(p)?;
    let q = normalized(q)?;

    let sum: f64 = p.iter().zip(&q).map(|(a, b)| (a - b).abs()).sum();
    Some(0.5 * sum)
}

/// Jensen-Shannon distance between `p` and `q`.
///
/// Computed as the square root of the base-2 Jensen-Shannon divergence
/// against the midpoint distribution. Bounded in [0, 1]; symmetric.
/// `None` when the inputs differ in length.
pub fn js_divergence(p: &[f64], q: &[f64]) -> Option<f64> {
    if p.len() != q.len() {
        return None;
    }
    let p = normalized(p)?;
    let q = normalized(q)?;

    let divergence: f64 = p
        .iter()
        .zip(&q)
        .map(|(a, b)| {
            let m = 0.5 * (a + b);
            let mut term = 0.0;
            if *a > 0.0 {
                term += 0.5 * a * (a / m).log2();
            }
            if *b > 0.0 {
                term += 0.5 * b * (b / m).log2();
            }
            term
        })
        .sum();

    // Floating-point noise can push an identical-distribution result a
    // hair below zero; clamp before the square root.
    Some(divergence.max(0.0).sqrt())
}

/// Kullback-Leibler divergence: Σ p·ln(p/q).
///
/// Both inputs are offset by 1e-12 before the log, unconditionally, so the
/// result is an approximation of the exact divergence even for well-formed
/// inputs. Asymmetric; ≥ 0 up to the offset approximation. `None` when the
/// inputs differ in length.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> Option<f64> {
    if p.len() != q.len() {
        return None;
    }
    if p.iter().sum::<f64>() <= 0.0 || q.iter().sum::<f64>() <= 0.0 {
        return None;
    }

    let sum: f64 = p
        .iter()
        .zip(q)
        .map(|(a, b)| {
            let a = a + KL_OFFSET;
            let b = b + KL_OFFSET;
            a * (a / b).ln()
        })
        .sum();
    Some(sum)
}
