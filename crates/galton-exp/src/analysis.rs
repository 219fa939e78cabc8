//! Statistical analysis of raw measurement counts.
//!
//! Runs the full post-processing pipeline over a backend's counts:
//! weight histogram, block coarsening, normal reference fit, and the
//! distance metrics against that reference.

use galton_hal::Counts;
use galton_stats::{
    block_centers, block_rescale, js_divergence, kl_divergence, mean_std, normal_reference,
    total_variation, weight_histogram,
};
use tracing::debug;

/// Output of the analysis pipeline for one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Raw per-weight probabilities, one slot per bin `0..=layers`.
    pub raw: Vec<f64>,
    /// Weighted centers of the grouped bins.
    pub centers: Vec<f64>,
    /// Grouped (block-coarsened) probabilities.
    pub grouped: Vec<f64>,
    /// Normal reference density evaluated at the centers.
    pub reference: Vec<f64>,
    /// Total outcomes in the backend's count table.
    pub recorded_shots: u64,
    /// Mean of the grouped distribution.
    pub mu: f64,
    /// Standard deviation of the grouped distribution.
    pub sigma: f64,
    /// Total variation distance to the reference, when both sides have mass.
    pub tv: Option<f64>,
    /// Jensen-Shannon distance to the reference, when both sides have mass.
    pub js: Option<f64>,
    /// Kullback-Leibler divergence to the reference, when both sides have mass.
    pub kl: Option<f64>,
}

/// Run the post-processing pipeline over raw counts.
///
/// Degenerate inputs (empty counts, zero-mass bins) flow through as
/// all-zero arrays with `None` metrics; only configuration errors are
/// rejected upstream, at board construction.
pub fn analyze(counts: &Counts, layers: usize, block_size: usize) -> Analysis {
    let (raw, recorded_shots) = weight_histogram(counts, layers);
    let (run_indices, grouped) = block_rescale(&raw, block_size);
    let centers = block_centers(&run_indices, block_size);

    let (mu, sigma) = mean_std(&centers, &grouped);
    let reference = normal_reference(&centers, mu, sigma);

    let tv = total_variation(&grouped, &reference);
    let js = js_divergence(&grouped, &reference);
    let kl = kl_divergence(&grouped, &reference);

    debug!(
        recorded_shots,
        mu, sigma, "analysis complete over {} grouped bins", grouped.len()
    );

    Analysis {
        raw,
        centers,
        grouped,
        reference,
        recorded_shots,
        mu,
        sigma,
        tv,
        js,
        kl,
    }
}
