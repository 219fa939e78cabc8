//! Statistical post-processing for Galton board runs.
//!
//! Converts raw outcome-count tables into normalized bin distributions,
//! optionally coarsens them in contiguous blocks, fits a discretized normal
//! reference, and computes divergence metrics against it.
//!
//! Everything here is synchronous, deterministic, and allocation-light.
//! Degenerate data (empty tables, zero-variance distributions) never
//! raises: the pipeline degrades to all-zero arrays and `None` divergences
//! by policy: invalid *configuration* fails fast elsewhere, invalid *data*
//! does not.
//!
//! # Pipeline
//!
//! ```text
//!   Counts ──→ weight_histogram ──→ block_rescale ──→ mean_std
//!                                        │               │
//!                                        └── block_centers┴─→ normal_reference
//!                                                              │
//!                                       total_variation / js / kl
//! ```

pub mod divergence;
pub mod histogram;
pub mod prob;
pub mod reference;
pub mod rescale;

pub use divergence::{js_divergence, kl_divergence, total_variation};
pub use histogram::weight_histogram;
pub use prob::normalized;
pub use reference::{binomial_pmf, mean_std, normal_reference};
pub use rescale::{block_centers, block_rescale};
