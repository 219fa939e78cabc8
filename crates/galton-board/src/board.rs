//! Board description and circuit construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use galton_ir::{Circuit, ClbitId, QubitId};

use crate::bias::BiasConfig;
use crate::error::{BoardError, BoardResult};

/// Per-step decision structure of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardMode {
    /// Independent per-step decisions; each contributes one bit toward the
    /// final bin.
    #[default]
    Standard,
    /// Unbiased mixing on every step plus a CZ phase coupling between each
    /// pair of adjacent steps.
    ///
    /// The CZ coupling is diagonal in the computational basis and therefore
    /// does not change measured statistics under this construction. It is
    /// emitted regardless: the coupling is part of the board's definition,
    /// and whether an observable interference effect was ever intended (a
    /// basis rotation before measurement would produce one) is left open.
    Interference,
}

/// A quantum Galton board: layer count, bias, and decision mode.
///
/// Construction is pure and deterministic; [`build`](GaltonBoard::build)
/// has no side effects and may be called repeatedly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaltonBoard {
    layers: usize,
    bias: BiasConfig,
    mode: BoardMode,
}

impl GaltonBoard {
    /// Create a board from parts.
    pub fn new(layers: usize, bias: BiasConfig, mode: BoardMode) -> Self {
        Self { layers, bias, mode }
    }

    /// An unbiased standard board: binomial outcome distribution.
    pub fn unbiased(layers: usize) -> Self {
        Self::new(layers, BiasConfig::Unbiased, BoardMode::Standard)
    }

    /// A standard board with the same bias angle on every step.
    pub fn biased(layers: usize, theta: f64) -> Self {
        Self::new(layers, BiasConfig::Uniform(theta), BoardMode::Standard)
    }

    /// A standard board with positional bias angles.
    pub fn per_step(layers: usize, thetas: Vec<f64>) -> Self {
        Self::new(layers, BiasConfig::PerStep(thetas), BoardMode::Standard)
    }

    /// An interference-mode board.
    pub fn interference(layers: usize) -> Self {
        Self::new(layers, BiasConfig::Unbiased, BoardMode::Interference)
    }

    /// Number of layers (decision steps).
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// The bias configuration.
    pub fn bias(&self) -> &BiasConfig {
        &self.bias
    }

    /// The decision mode.
    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    /// Build the board circuit.
    ///
    /// One qubit and one classical bit per layer; every qubit gets exactly
    /// one coin gate and one terminal measurement, in step order. Fails
    /// with [`BoardError::InvalidConfiguration`] when `layers < 1`.
    pub fn build(&self) -> BoardResult<Circuit> {
        if self.layers < 1 {
            return Err(BoardError::InvalidConfiguration(format!(
                "layer count must be >= 1, got {}",
                self.layers
            )));
        }

        let n = u32::try_from(self.layers).map_err(|_| {
            BoardError::InvalidConfiguration(format!("layer count {} too large", self.layers))
        })?;

        let angles = self.bias.resolve(self.layers);
        if self.mode == BoardMode::Interference && self.bias.is_biased() {
            debug!("bias angles are ignored in interference mode");
        }

        let mut circuit = Circuit::with_size("galton_board", n, n);

        // Coin gates, one per step.
        for (i, angle) in angles.iter().enumerate() {
            let q = QubitId::from(i);
            match (self.mode, angle) {
                (BoardMode::Interference, _) | (BoardMode::Standard, None) => circuit.h(q)?,
                (BoardMode::Standard, Some(theta)) => circuit.ry(*theta, q)?,
            };
        }

        // Phase coupling between adjacent steps.
        if self.mode == BoardMode::Interference {
            for i in 0..self.layers - 1 {
                circuit.cz(QubitId::from(i), QubitId::from(i + 1))?;
            }
        }

        // Terminal observation slots, in step order.
        for i in 0..self.layers {
            circuit.measure(QubitId::from(i), ClbitId::from(i))?;
        }

        debug!(
            layers = self.layers,
            mode = ?self.mode,
            instructions = circuit.num_instructions(),
            "built board circuit"
        );

        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_layers_rejected() {
        let err = GaltonBoard::unbiased(0).build().unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_unbiased_structure() {
        let circuit = GaltonBoard::unbiased(5).build().unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
        assert_eq!(circuit.count_gates("h"), 5);
        assert_eq!(circuit.count_gates("ry"), 0);
        assert_eq!(circuit.count_gates("cz"), 0);
        assert_eq!(circuit.count_measurements(), 5);
    }

    #[test]
    fn test_biased_structure() {
        let circuit = GaltonBoard::biased(4, 2.0).build().unwrap();
        assert_eq!(circuit.count_gates("ry"), 4);
        assert_eq!(circuit.count_gates("h"), 0);
    }

    #[test]
    fn test_per_step_defaults_to_unbiased() {
        let circuit = GaltonBoard::per_step(4, vec![1.0, 2.0]).build().unwrap();
        assert_eq!(circuit.count_gates("ry"), 2);
        assert_eq!(circuit.count_gates("h"), 2);
    }

    #[test]
    fn test_interference_coupling_count() {
        let circuit = GaltonBoard::interference(3).build().unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.count_measurements(), 3);
        assert_eq!(circuit.count_gates("cz"), 2);
        assert_eq!(circuit.count_gates("h"), 3);
    }

    #[test]
    fn test_interference_ignores_bias() {
        let board = GaltonBoard::new(3, BiasConfig::Uniform(1.5), BoardMode::Interference);
        let circuit = board.build().unwrap();
        assert_eq!(circuit.count_gates("ry"), 0);
        assert_eq!(circuit.count_gates("h"), 3);
    }

    #[test]
    fn test_single_layer_interference_has_no_coupling() {
        let circuit = GaltonBoard::interference(1).build().unwrap();
        assert_eq!(circuit.count_gates("cz"), 0);
        assert_eq!(circuit.count_gates("h"), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let board = GaltonBoard::biased(6, 0.7);
        assert_eq!(board.build().unwrap(), board.build().unwrap());
    }
}
