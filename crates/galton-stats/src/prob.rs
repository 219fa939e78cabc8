//! Shared probability-vector helpers.

/// Renormalize a nonnegative vector to unit mass.
///
/// Returns `None` when the total mass is zero. This is the single zero-guard used
/// by every stage of the pipeline, so degenerate-case semantics stay
/// consistent across extractor, rescaler, and divergence metrics.
pub fn normalized(p: &[f64]) -> Option<Vec<f64>> {
    let mass: f64 = p.iter().sum();
    if mass <= 0.0 {
        return None;
    }
    Some(p.iter().map(|x| x / mass).collect())
}
