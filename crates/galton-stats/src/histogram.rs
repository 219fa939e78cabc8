//! Hamming-weight reduction of outcome tables.

use tracing::warn;

use galton_hal::Counts;

use crate::prob::normalized;

/// Reduce an outcome table to a bin distribution indexed by Hamming weight.
///
/// Each outcome bitstring contributes its occurrence count to bin k, where
/// k is the number of `'1'` symbols in the key. The result has
/// `layers + 1` bins and sums to 1, or is all-zero when no valid outcomes
/// were accumulated. The second value is the raw table's total count,
/// reported even when the distribution is degenerate.
///
/// Keys whose weight exceeds `layers` cannot come from a `layers`-step
/// board and are skipped with a warning.
pub fn weight_histogram(counts: &Counts, layers: usize) -> (Vec<f64>, u64) {
    let total = counts.total();
    let mut hist = vec![0.0_f64; layers + 1];

    for (bits, freq) in counts.iter() {
        let ones = bits.chars().filter(|c| *c == '1').count();
        if ones > layers {
            warn!("outcome '{bits}' has weight {ones} > {layers} layers, skipping");
            continue;
        }
        hist[ones] += freq as f64;
    }

    match normalized(&hist) {
        Some(probs) => (probs, total),
        None => (hist, total),
    }
}
