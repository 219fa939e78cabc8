//! Experiment record structure.
//!
//! The serializable summary of a single board run, written alongside the
//! distribution table by the results sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::params::ExperimentParams;

/// Summary of one completed experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Experiment name, used as the output file prefix.
    pub name: String,
    /// Backend that executed the circuit.
    pub backend: String,
    /// Timestamp of the run.
    pub timestamp: DateTime<Utc>,
    /// Number of board layers (decision steps).
    pub n_layers: usize,
    /// Requested shot count.
    pub shots: u32,
    /// Shots actually recorded by the backend.
    pub recorded_shots: u64,
    /// Block size used when rescaling the weight distribution.
    pub block_size: usize,
    /// Mean of the grouped distribution.
    pub mu: f64,
    /// Standard deviation of the grouped distribution.
    pub sigma: f64,
    /// Total variation distance to the normal reference, when defined.
    #[serde(rename = "TV")]
    pub tv: Option<f64>,
    /// Jensen-Shannon distance to the normal reference, when defined.
    #[serde(rename = "JS")]
    pub js: Option<f64>,
    /// Kullback-Leibler divergence to the normal reference, when defined.
    #[serde(rename = "KL")]
    pub kl: Option<f64>,
}

impl ExperimentRecord {
    /// Assemble a record from the run parameters and the finished analysis.
    pub fn from_analysis(
        name: &str,
        backend: &str,
        params: &ExperimentParams,
        analysis: &Analysis,
    ) -> Self {
        Self {
            name: name.to_string(),
            backend: backend.to_string(),
            timestamp: Utc::now(),
            n_layers: params.layers,
            shots: params.shots,
            recorded_shots: analysis.recorded_shots,
            block_size: params.block_size,
            mu: analysis.mu,
            sigma: analysis.sigma,
            tv: analysis.tv,
            js: analysis.js,
            kl: analysis.kl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divergence_keys_are_uppercase() {
        let record = ExperimentRecord {
            name: "gaussian".to_string(),
            backend: "simulator".to_string(),
            timestamp: Utc::now(),
            n_layers: 4,
            shots: 100,
            recorded_shots: 100,
            block_size: 1,
            mu: 2.0,
            sigma: 1.0,
            tv: Some(0.1),
            js: Some(0.1),
            kl: Some(0.01),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"TV\""));
        assert!(json.contains("\"JS\""));
        assert!(json.contains("\"KL\""));
        assert!(!json.contains("\"tv\""));

        let back: ExperimentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tv, Some(0.1));
    }
}
