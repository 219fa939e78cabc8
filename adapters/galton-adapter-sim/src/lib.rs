//! Local statevector simulator backend.
//!
//! Exact statevector simulation of board circuits, suitable for the small
//! qubit counts (tens) this workspace targets. Gates are applied once per
//! circuit; measurement outcomes are then sampled per shot from the final
//! amplitudes, optionally under a fixed RNG seed for reproducible runs.
//!
//! # Example
//!
//! ```ignore
//! use galton_adapter_sim::SimulatorBackend;
//! use galton_hal::Backend;
//! use galton_board::GaltonBoard;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::with_seed(42);
//!     let circuit = GaltonBoard::unbiased(4).build()?;
//!
//!     let result = backend.run(&circuit, 1000).await?;
//!     assert_eq!(result.counts.total(), 1000);
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
