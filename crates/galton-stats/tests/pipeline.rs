//! End-to-end tests for the statistics pipeline.

use galton_hal::Counts;
use galton_stats::{
    binomial_pmf, block_centers, block_rescale, js_divergence, kl_divergence, mean_std,
    normal_reference, total_variation, weight_histogram,
};

// ---------------------------------------------------------------------------
// Histogram through reference fit
// ---------------------------------------------------------------------------

/// All 16 four-bit strings with equal counts collapse to the binomial
/// weight profile.
#[test]
fn uniform_counts_give_binomial_bins() {
    let mut counts = Counts::new();
    for v in 0..16u32 {
        counts.insert(format!("{v:04b}"), 4);
    }

    let (probs, total) = weight_histogram(&counts, 4);

    assert_eq!(total, 64);
    let expected = binomial_pmf(4, 0.5);
    for (got, want) in probs.iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn binomial_bins_fit_their_own_moments() {
    let probs = binomial_pmf(10, 0.5);
    let centers: Vec<f64> = (0..probs.len()).map(|i| i as f64).collect();

    let (mu, sigma) = mean_std(&centers, &probs);

    // Binomial(10, 0.5): mean 5, variance 2.5.
    assert!((mu - 5.0).abs() < 1e-12);
    assert!((sigma - 2.5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn normal_reference_tracks_wide_binomial() {
    // At 40 layers the binomial is close to its normal limit.
    let probs = binomial_pmf(40, 0.5);
    let centers: Vec<f64> = (0..probs.len()).map(|i| i as f64).collect();
    let (mu, sigma) = mean_std(&centers, &probs);
    let reference = normal_reference(&centers, mu, sigma);

    let tv = total_variation(&probs, &reference).unwrap();
    assert!(tv < 0.02, "tv = {tv}");

    let js = js_divergence(&probs, &reference).unwrap();
    assert!(js < 0.05, "js = {js}");
}

// ---------------------------------------------------------------------------
// Block coarsening
// ---------------------------------------------------------------------------

#[test]
fn coarsened_pipeline_stays_normalized() {
    let probs = binomial_pmf(12, 0.5);
    let (indices, grouped) = block_rescale(&probs, 3);
    let centers = block_centers(&indices, 3);

    assert_eq!(grouped.len(), 5);
    assert_eq!(centers.len(), 5);
    let total: f64 = grouped.iter().sum();
    assert!((total - 1.0).abs() < 1e-12);

    // Group 0 covers source bins 0..=2, center at 1.0.
    assert!((centers[0] - 1.0).abs() < 1e-12);
}

#[test]
fn coarsening_preserves_the_mean() {
    let probs = binomial_pmf(8, 0.5);
    let fine_centers: Vec<f64> = (0..probs.len()).map(|i| i as f64).collect();
    let (fine_mu, _) = mean_std(&fine_centers, &probs);

    let (indices, grouped) = block_rescale(&probs, 3);
    let centers = block_centers(&indices, 3);
    let (coarse_mu, _) = mean_std(&centers, &grouped);

    // Grouping onto block centers shifts the mean by less than half a block.
    assert!((fine_mu - coarse_mu).abs() < 1.5);
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn empty_counts_flow_through_as_zeros() {
    let counts = Counts::new();
    let (probs, total) = weight_histogram(&counts, 5);

    assert_eq!(total, 0);
    assert_eq!(probs.len(), 6);
    assert!(probs.iter().all(|&p| p == 0.0));

    let (indices, grouped) = block_rescale(&probs, 2);
    let centers = block_centers(&indices, 2);
    let (mu, sigma) = mean_std(&centers, &grouped);
    assert_eq!(mu, 0.0);
    assert_eq!(sigma, 0.0);

    let reference = normal_reference(&centers, mu, sigma);
    assert!(reference.iter().all(|&q| q == 0.0));

    assert!(total_variation(&grouped, &reference).is_none());
    assert!(js_divergence(&grouped, &reference).is_none());
    assert!(kl_divergence(&grouped, &reference).is_none());
}

#[test]
fn overweight_bitstrings_are_skipped() {
    let mut counts = Counts::new();
    counts.insert("01", 10);
    counts.insert("0111", 90); // weight 3 exceeds a 2-layer board, dropped

    let (probs, total) = weight_histogram(&counts, 2);

    // Raw table total is reported even though one key was dropped.
    assert_eq!(total, 100);
    assert!((probs[1] - 1.0).abs() < 1e-12);
    assert_eq!(probs.len(), 3);
}
