//! Galton Hardware Abstraction Layer
//!
//! This crate defines the boundary between the board/statistics code and
//! whatever actually executes a circuit. The core pipeline only ever needs
//! one capability: run a circuit for a number of shots and get back a table
//! of outcome counts.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//! - Job lifecycle types ([`Job`], [`JobId`], [`JobStatus`])
//! - A [`BackendRegistry`] for name-keyed backend construction
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use galton_hal::Backend;
//! use galton_adapter_sim::SimulatorBackend;
//! use galton_board::GaltonBoard;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let circuit = GaltonBoard::unbiased(4).build()?;
//!     let backend = SimulatorBackend::new();
//!
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Each key is a 4-bit outcome string, leftmost bit = step 0.
//!     for (bits, count) in result.counts.iter() {
//!         println!("{bits}: {count}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod job;
pub mod registry;
pub mod result;

pub use backend::{Backend, BackendAvailability, BackendConfig, BackendFactory};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use registry::BackendRegistry;
pub use result::{Counts, ExecutionResult};
