//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines the lifecycle for interacting with an
//! execution backend:
//!
//! ```text
//!   availability() ──→ submit() ──→ status() ──→ result()
//!       (async)         (async)      (async)      (async)
//! ```
//!
//! All I/O methods are async; the `Send + Sync` bound enables shared
//! ownership across tasks. The statistical pipeline never retries a failed
//! backend; fallback across backends belongs to the caller.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use galton_ir::Circuit;

use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
///
/// `seed` and the `extra` map are opaque tuning knobs; backends that do not
/// understand a key ignore it.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Optional RNG seed for reproducible sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("seed", &self.seed)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for execution backends.
///
/// # Contract
///
/// - `submit()` MUST validate shots (>= 1) and circuit size, and return a
///   `JobId` whose job starts in `Queued` status.
/// - `result()` MUST only be called when status is `Completed`; the
///   returned counts MUST sum to the requested shots.
/// - `wait()` has a default implementation (100ms poll, 5-minute timeout).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Maximum circuit width this backend accepts.
    fn max_qubits(&self) -> u32;

    /// Check backend availability.
    async fn availability(&self) -> HalResult<BackendAvailability>;

    /// Submit a circuit for execution.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 100ms for up to 5 minutes.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(100);
        let max_polls = 3000; // 5 minutes max

        for _ in 0..max_polls {
            let status = self.status(job_id).await?;

            match status {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }

    /// Submit a circuit and wait for its result.
    async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let job_id = self.submit(circuit, shots).await?;
        self.wait(&job_id).await
    }
}

/// Backend availability information.
#[derive(Debug, Clone)]
pub struct BackendAvailability {
    /// Whether the backend is currently accepting jobs.
    pub is_available: bool,
    /// Human-readable status message.
    pub status_message: Option<String>,
}

impl BackendAvailability {
    /// Availability for a backend that is always ready.
    ///
    /// Typical for local simulators.
    pub fn always_available() -> Self {
        Self {
            is_available: true,
            status_message: None,
        }
    }

    /// Availability for an offline backend.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            is_available: false,
            status_message: Some(reason.into()),
        }
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test")
            .with_seed(42)
            .with_extra("max_qubits", serde_json::json!(12));

        assert_eq!(config.name, "test");
        assert_eq!(config.seed, Some(42));
        assert!(config.extra.contains_key("max_qubits"));
    }

    #[test]
    fn test_availability() {
        let avail = BackendAvailability::always_available();
        assert!(avail.is_available);

        let down = BackendAvailability::unavailable("maintenance");
        assert!(!down.is_available);
        assert_eq!(down.status_message.as_deref(), Some("maintenance"));
    }
}
