//! Named board experiments.
//!
//! Each experiment pairs a board configuration with run parameters and a
//! name used for its output artifacts. The three stock experiments mirror
//! the standard verification suite:
//!
//! - `gaussian`: unbiased board, binomial bins converging on a normal.
//! - `exponential`: uniformly biased coin with a geometrically decaying tail.
//! - `interference`: unbiased coins with couplings between adjacent steps.

use galton_board::GaltonBoard;
use tracing::info;

use crate::analysis::{Analysis, analyze};
use crate::error::ExpResult;
use crate::launcher::Launcher;
use crate::params::ExperimentParams;
use crate::record::ExperimentRecord;
use crate::sink::ResultsSink;

/// Rotation angle for the stock exponential experiment.
///
/// P(step = 1) = sin^2(1.0) ~= 0.708, which piles mass at the high-weight
/// edge with a roughly geometric tail toward low weights.
pub const EXPONENTIAL_THETA: f64 = 2.0;

/// A named board run.
#[derive(Debug, Clone)]
pub struct Experiment {
    name: String,
    board: GaltonBoard,
    params: ExperimentParams,
}

impl Experiment {
    /// Experiment over an arbitrary board.
    pub fn new(name: impl Into<String>, board: GaltonBoard, params: ExperimentParams) -> Self {
        Self {
            name: name.into(),
            board,
            params,
        }
    }

    /// Unbiased board: the distribution should track the binomial.
    pub fn gaussian(params: ExperimentParams) -> Self {
        let board = GaltonBoard::unbiased(params.layers);
        Self::new("gaussian", board, params)
    }

    /// Uniformly biased board with the stock exponential angle.
    pub fn exponential(params: ExperimentParams) -> Self {
        let board = GaltonBoard::biased(params.layers, EXPONENTIAL_THETA);
        Self::new("exponential", board, params)
    }

    /// Unbiased board with couplings between adjacent steps.
    pub fn interference(params: ExperimentParams) -> Self {
        let board = GaltonBoard::interference(params.layers);
        Self::new("interference", board, params)
    }

    /// Experiment name, used as the artifact prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run parameters.
    pub fn params(&self) -> &ExperimentParams {
        &self.params
    }

    /// Board configuration.
    pub fn board(&self) -> &GaltonBoard {
        &self.board
    }

    /// Build the circuit, execute it, and analyze the counts.
    pub async fn run(&self, launcher: &Launcher) -> ExpResult<(ExperimentRecord, Analysis)> {
        let circuit = self.board.build()?;
        info!(
            experiment = self.name,
            layers = self.params.layers,
            shots = self.params.shots,
            "running experiment"
        );

        let (backend, result) = launcher.launch(&circuit, self.params.shots).await?;
        let analysis = analyze(&result.counts, self.params.layers, self.params.block_size);
        let record = ExperimentRecord::from_analysis(&self.name, &backend, &self.params, &analysis);

        Ok((record, analysis))
    }

    /// Run the experiment and persist its artifacts through the sink.
    pub async fn run_and_save(
        &self,
        launcher: &Launcher,
        sink: &ResultsSink,
    ) -> ExpResult<ExperimentRecord> {
        let (record, analysis) = self.run(launcher).await?;
        sink.write(&record, &analysis)?;
        Ok(record)
    }
}

/// The standard three-experiment verification suite.
pub fn standard_suite(params: ExperimentParams) -> Vec<Experiment> {
    vec![
        Experiment::gaussian(params.clone()),
        Experiment::exponential(params.clone()),
        Experiment::interference(params),
    ]
}
