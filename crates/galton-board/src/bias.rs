//! Per-step bias configuration.

use serde::{Deserialize, Serialize};

/// How the decision coin is biased, per step.
///
/// The configuration is resolved once into a concrete per-step angle list
/// at build time; downstream code never re-inspects the variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum BiasConfig {
    /// Every step is a fair 50/50 coin.
    #[default]
    Unbiased,
    /// The same angle θ on every step: P(1) = sin²(θ/2).
    Uniform(f64),
    /// Positional angles. Steps beyond the end of the list fall back to an
    /// unbiased coin; surplus entries are ignored.
    PerStep(Vec<f64>),
}

impl BiasConfig {
    /// Resolve this configuration into one angle slot per step.
    ///
    /// `None` means "use the unbiased coin" for that step.
    pub fn resolve(&self, layers: usize) -> Vec<Option<f64>> {
        match self {
            BiasConfig::Unbiased => vec![None; layers],
            BiasConfig::Uniform(theta) => vec![Some(*theta); layers],
            BiasConfig::PerStep(thetas) => (0..layers)
                .map(|i| thetas.get(i).copied())
                .collect(),
        }
    }

    /// Whether any step carries a bias angle.
    pub fn is_biased(&self) -> bool {
        match self {
            BiasConfig::Unbiased => false,
            BiasConfig::Uniform(_) => true,
            BiasConfig::PerStep(thetas) => !thetas.is_empty(),
        }
    }
}

impl From<f64> for BiasConfig {
    fn from(theta: f64) -> Self {
        BiasConfig::Uniform(theta)
    }
}

impl From<Vec<f64>> for BiasConfig {
    fn from(thetas: Vec<f64>) -> Self {
        BiasConfig::PerStep(thetas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbiased_resolve() {
        assert_eq!(BiasConfig::Unbiased.resolve(3), vec![None, None, None]);
    }

    #[test]
    fn test_uniform_resolve() {
        let angles = BiasConfig::Uniform(2.0).resolve(2);
        assert_eq!(angles, vec![Some(2.0), Some(2.0)]);
    }

    #[test]
    fn test_per_step_pads_with_unbiased() {
        let angles = BiasConfig::PerStep(vec![0.5, 1.5]).resolve(4);
        assert_eq!(angles, vec![Some(0.5), Some(1.5), None, None]);
    }

    #[test]
    fn test_per_step_ignores_surplus() {
        let angles = BiasConfig::PerStep(vec![0.1, 0.2, 0.3]).resolve(2);
        assert_eq!(angles, vec![Some(0.1), Some(0.2)]);
    }

    #[test]
    fn test_default_is_unbiased() {
        assert_eq!(BiasConfig::default(), BiasConfig::Unbiased);
        assert!(!BiasConfig::default().is_biased());
    }
}
