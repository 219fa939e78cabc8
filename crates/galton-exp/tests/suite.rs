//! End-to-end tests for the stock experiment suite on the local simulator.

use galton_exp::{Experiment, ExperimentParams, Launcher, ResultsSink, standard_suite};

fn params(layers: usize, shots: u32, seed: u64) -> ExperimentParams {
    ExperimentParams::with_layers(layers).shots(shots).seed(seed)
}

// ---------------------------------------------------------------------------
// Gaussian verification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gaussian_tracks_its_normal_reference() {
    let p = params(10, 10_000, 1234);
    let launcher = Launcher::simulator(p.seed);

    let (record, analysis) = Experiment::gaussian(p).run(&launcher).await.unwrap();

    assert_eq!(record.recorded_shots, 10_000);
    assert_eq!(analysis.grouped.len(), 11);

    // Binomial(10, 0.5): mean 5, std sqrt(2.5).
    assert!((record.mu - 5.0).abs() < 0.1, "mu = {}", record.mu);
    assert!((record.sigma - 2.5f64.sqrt()).abs() < 0.1);

    let tv = record.tv.expect("tv defined for a populated run");
    assert!(tv < 0.1, "tv = {tv}");
    let js = record.js.expect("js defined for a populated run");
    assert!(js < 0.2, "js = {js}");
}

#[tokio::test]
async fn seeded_runs_are_reproducible() {
    let p = params(6, 2_000, 99);
    let launcher = Launcher::simulator(p.seed);

    let (_, first) = Experiment::gaussian(p.clone()).run(&launcher).await.unwrap();
    let (_, second) = Experiment::gaussian(p).run(&launcher).await.unwrap();

    assert_eq!(first.grouped, second.grouped);
}

// ---------------------------------------------------------------------------
// Exponential and interference targets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn exponential_shifts_the_mean() {
    let p = params(8, 5_000, 7);
    let launcher = Launcher::simulator(p.seed);

    let (record, _) = Experiment::exponential(p).run(&launcher).await.unwrap();

    // sin^2(1.0) ~= 0.708 per step, so the mean sits near 5.66 of 8.
    assert!((record.mu - 8.0 * 1.0f64.sin().powi(2)).abs() < 0.2);
}

#[tokio::test]
async fn interference_matches_unbiased_statistics() {
    let p = params(8, 5_000, 42);
    let launcher = Launcher::simulator(p.seed);

    let (_, plain) = Experiment::gaussian(p.clone()).run(&launcher).await.unwrap();
    let (_, coupled) = Experiment::interference(p).run(&launcher).await.unwrap();

    // Phase couplings are diagonal, so sampled statistics coincide
    // under the same seed.
    assert_eq!(plain.grouped, coupled.grouped);
}

// ---------------------------------------------------------------------------
// Suite orchestration and artifacts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suite_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let sink = ResultsSink::new(dir.path());
    let p = params(4, 1_000, 5);
    let launcher = Launcher::simulator(p.seed);

    for experiment in standard_suite(p) {
        experiment.run_and_save(&launcher, &sink).await.unwrap();
    }

    for name in ["gaussian", "exponential", "interference"] {
        assert!(dir.path().join(format!("{name}_metadata.json")).exists());
        assert!(dir.path().join(format!("{name}_distribution.csv")).exists());
    }
}
