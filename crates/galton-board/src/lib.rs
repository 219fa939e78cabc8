//! Quantum Galton Board circuit construction.
//!
//! A Galton board with N layers is modeled as N independent binary decision
//! variables: one qubit per peg, each measured once. The final bin of a
//! "ball" is the Hamming weight of the measured bitstring, which makes the
//! outcome distribution binomial for unbiased coins.
//!
//! # Decision modes
//!
//! - **Standard**: each step gets its own coin gate: H for an unbiased
//!   50/50 decision, or Ry(θ) for a biased one with P(1) = sin²(θ/2).
//! - **Interference**: H on every step plus a CZ phase coupling between
//!   each pair of adjacent steps. See [`BoardMode::Interference`] for why
//!   the coupling is kept even though it does not change sampled
//!   statistics.
//!
//! # Example
//!
//! ```rust
//! use galton_board::GaltonBoard;
//!
//! let circuit = GaltonBoard::unbiased(4).build().unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(circuit.count_measurements(), 4);
//! ```

pub mod bias;
pub mod board;
pub mod error;

pub use bias::BiasConfig;
pub use board::{BoardMode, GaltonBoard};
pub use error::{BoardError, BoardResult};
