//! Galton experiment orchestration.
//!
//! Ties the board builder, the execution backends, and the statistics
//! pipeline into runnable experiments with persisted artifacts.
//!
//! # Flow
//!
//! ```text
//! [GaltonBoard] -> build -> [Launcher] -> counts
//!                                           |
//!                                           v
//!                                       [analyze]
//!                                           |
//!                                           v
//!                          [ExperimentRecord] + [ResultsSink]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use galton_exp::{Experiment, ExperimentParams, Launcher, ResultsSink};
//!
//! let params = ExperimentParams::default().seed(42);
//! let launcher = Launcher::simulator(params.seed);
//! let sink = ResultsSink::new("results");
//! let record = Experiment::gaussian(params).run_and_save(&launcher, &sink).await?;
//! println!("tv = {:?}", record.tv);
//! ```

pub mod analysis;
pub mod error;
pub mod experiments;
pub mod launcher;
pub mod params;
pub mod record;
pub mod sink;

pub use analysis::{Analysis, analyze};
pub use error::{ExpError, ExpResult};
pub use experiments::{EXPONENTIAL_THETA, Experiment, standard_suite};
pub use launcher::{Launcher, default_registry};
pub use params::ExperimentParams;
pub use record::ExperimentRecord;
pub use sink::ResultsSink;
