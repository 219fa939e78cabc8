//! Contiguous block coarsening of bin distributions.

use crate::prob::normalized;

/// Group a bin distribution into contiguous blocks.
///
/// Returns `(run_indices, grouped)` where `run_indices` are 0-based group
/// indices (not weighted centers, see [`block_centers`]).
///
/// - `block_size <= 1`: identity. Indices `0..len`, probabilities
///   unchanged.
/// - `block_size > 1`: each group sums up to `block_size` adjacent bins
///   (the final group may be shorter), and the grouped array is
///   renormalized by its own total. A zero-mass input stays all-zero
///   rather than dividing by zero.
pub fn block_rescale(probs: &[f64], block_size: usize) -> (Vec<f64>, Vec<f64>) {
    if block_size <= 1 {
        let indices = (0..probs.len()).map(|i| i as f64).collect();
        return (indices, probs.to_vec());
    }

    let grouped: Vec<f64> = probs
        .chunks(block_size)
        .map(|chunk| chunk.iter().sum())
        .collect();
    let indices = (0..grouped.len()).map(|i| i as f64).collect();

    match normalized(&grouped) {
        Some(renorm) => (indices, renorm),
        None => (indices, grouped),
    }
}

/// Geometric bin centers for a grouped distribution.
///
/// Group i spans source bins `[i*block, i*block + block - 1]`, so its
/// center of mass sits at `i*block + (block-1)/2`. With `block_size = 1`
/// this is the identity on the run indices.
pub fn block_centers(run_indices: &[f64], block_size: usize) -> Vec<f64> {
    let block = block_size.max(1) as f64;
    run_indices
        .iter()
        .map(|i| i * block + (block - 1.0) / 2.0)
        .collect()
}
