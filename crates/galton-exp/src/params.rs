//! Experiment run parameters.

use serde::{Deserialize, Serialize};

/// Parameters shared by every board experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentParams {
    /// Number of board layers (decision steps).
    pub layers: usize,
    /// Number of measurement shots.
    pub shots: u32,
    /// Contiguous block size for coarsening the weight distribution.
    pub block_size: usize,
    /// Optional RNG seed for reproducible simulator runs.
    pub seed: Option<u64>,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            layers: 20,
            shots: 20_000,
            block_size: 1,
            seed: None,
        }
    }
}

impl ExperimentParams {
    /// Parameters with a given layer count and the remaining defaults.
    pub fn with_layers(layers: usize) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    /// Set the shot count.
    pub fn shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Set the block size.
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Set the simulator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
