//! CLI command implementations.

pub mod backends;
pub mod board;
pub mod experiment;
pub mod version;
