//! Galton Circuit Intermediate Representation
//!
//! This crate provides the core data structures for describing the quantum
//! circuits the rest of the workspace builds, executes, and analyzes.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered sequence of [`Instruction`]s over a set of
//! qubits and classical bits. Galton-board circuits are strictly linear
//! (per-step decision gates, optional neighbor couplings, terminal
//! measurements), so the IR keeps instructions in application order rather
//! than in a dependency graph.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//! - **Gates**: [`StandardGate`] with concrete angles for rotations
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: One Decision Step
//!
//! ```rust
//! use galton_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("step", 1, 1);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 1);
//! assert_eq!(circuit.num_instructions(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
