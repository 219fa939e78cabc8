//! Backend launcher with ordered fallback.
//!
//! Experiments do not talk to a backend directly; they hand the circuit
//! to a [`Launcher`], which walks its backend list in order, skips the
//! unavailable ones, and returns the first successful execution.

use galton_hal::{
    Backend, BackendConfig, BackendFactory, BackendRegistry, ExecutionResult,
};
use galton_ir::Circuit;
use tracing::{debug, warn};

use crate::error::{ExpError, ExpResult};

/// Registry holding every backend this build knows about.
pub fn default_registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register("simulator", |config| {
        Ok(Box::new(galton_adapter_sim::SimulatorBackend::from_config(config)?) as Box<dyn Backend>)
    });
    registry
}

/// Ordered list of execution backends.
pub struct Launcher {
    backends: Vec<Box<dyn Backend>>,
}

impl Launcher {
    /// Launcher over an explicit backend list. Order is priority order.
    pub fn new(backends: Vec<Box<dyn Backend>>) -> Self {
        Self { backends }
    }

    /// Launcher with a single local simulator, optionally seeded.
    pub fn simulator(seed: Option<u64>) -> Self {
        let backend = match seed {
            Some(seed) => galton_adapter_sim::SimulatorBackend::with_seed(seed),
            None => galton_adapter_sim::SimulatorBackend::new(),
        };
        Self::new(vec![Box::new(backend)])
    }

    /// Launcher resolving backend names through a registry, in the given
    /// priority order.
    pub fn from_registry(
        registry: &BackendRegistry,
        names: &[&str],
        seed: Option<u64>,
    ) -> ExpResult<Self> {
        let mut backends = Vec::with_capacity(names.len());
        for name in names {
            let mut config = BackendConfig::new(*name);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let backend = registry
                .create(name, config)
                .map_err(|e| ExpError::Execution(e.to_string()))?;
            backends.push(backend);
        }
        Ok(Self::new(backends))
    }

    /// Names of the configured backends, in priority order.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Execute the circuit on the first backend that accepts it.
    ///
    /// Unavailable backends are skipped; submission or execution failures
    /// are logged and the next backend is tried. Returns the executing
    /// backend's name alongside the result.
    pub async fn launch(
        &self,
        circuit: &Circuit,
        shots: u32,
    ) -> ExpResult<(String, ExecutionResult)> {
        for backend in &self.backends {
            match backend.availability().await {
                Ok(availability) if availability.is_available => {}
                Ok(availability) => {
                    warn!(
                        backend = backend.name(),
                        reason = availability.status_message.as_deref().unwrap_or("unknown"),
                        "backend unavailable, trying next"
                    );
                    continue;
                }
                Err(e) => {
                    warn!(
                        backend = backend.name(),
                        error = %e,
                        "availability check failed, trying next"
                    );
                    continue;
                }
            }

            debug!(backend = backend.name(), shots, "launching circuit");
            match backend.run(circuit, shots).await {
                Ok(result) => return Ok((backend.name().to_string(), result)),
                Err(e) => {
                    warn!(
                        backend = backend.name(),
                        error = %e,
                        "execution failed, trying next"
                    );
                }
            }
        }

        Err(ExpError::Execution(format!(
            "no backend could execute the circuit (tried {})",
            self.backend_names().join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use galton_board::GaltonBoard;
    use galton_hal::{BackendAvailability, HalError, HalResult, JobId, JobStatus};

    struct DownBackend;

    #[async_trait]
    impl Backend for DownBackend {
        fn name(&self) -> &str {
            "down"
        }

        fn max_qubits(&self) -> u32 {
            1
        }

        async fn availability(&self) -> HalResult<BackendAvailability> {
            Ok(BackendAvailability::unavailable("maintenance window"))
        }

        async fn submit(&self, _circuit: &Circuit, _shots: u32) -> HalResult<JobId> {
            Err(HalError::BackendUnavailable("down".into()))
        }

        async fn status(&self, _job_id: &JobId) -> HalResult<JobStatus> {
            Err(HalError::JobNotFound("none".into()))
        }

        async fn result(&self, _job_id: &JobId) -> HalResult<ExecutionResult> {
            Err(HalError::JobNotFound("none".into()))
        }

        async fn cancel(&self, _job_id: &JobId) -> HalResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_falls_through_to_simulator() {
        let launcher = Launcher::new(vec![
            Box::new(DownBackend),
            Box::new(galton_adapter_sim::SimulatorBackend::with_seed(7)),
        ]);
        let circuit = GaltonBoard::unbiased(2).build().unwrap();

        let (name, result) = launcher.launch(&circuit, 100).await.unwrap();
        assert_eq!(name, "simulator");
        assert_eq!(result.counts.total(), 100);
    }

    #[tokio::test]
    async fn test_registry_resolves_simulator() {
        let registry = default_registry();
        assert!(registry.has_backend("simulator"));

        let launcher = Launcher::from_registry(&registry, &["simulator"], Some(5)).unwrap();
        let circuit = GaltonBoard::unbiased(2).build().unwrap();

        let (name, result) = launcher.launch(&circuit, 50).await.unwrap();
        assert_eq!(name, "simulator");
        assert_eq!(result.counts.total(), 50);
    }

    #[test]
    fn test_registry_rejects_unknown_name() {
        let registry = default_registry();
        let result = Launcher::from_registry(&registry, &["hardware"], None);
        assert!(matches!(result, Err(ExpError::Execution(_))));
    }

    #[tokio::test]
    async fn test_all_backends_down() {
        let launcher = Launcher::new(vec![Box::new(DownBackend)]);
        let circuit = GaltonBoard::unbiased(1).build().unwrap();

        let err = launcher.launch(&circuit, 10).await.unwrap_err();
        assert!(matches!(err, ExpError::Execution(_)));
    }
}
