//! Execution results: outcome counts and run metadata.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A table of measurement outcomes.
///
/// Keys are outcome bitstrings with the leftmost character corresponding to
/// step/qubit 0. Values are occurrence counts; the sum of all counts equals
/// the number of shots executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts table.
    pub fn new() -> Self {
        Self(FxHashMap::default())
    }

    /// Add `count` occurrences of an outcome, accumulating with any
    /// previously recorded occurrences of the same bitstring.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for an outcome (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded occurrences across all outcomes.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The most frequently observed outcome, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (bits, count) in iter {
            counts.insert(bits, count);
        }
        counts
    }
}

/// The complete result of executing a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Outcome counts.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("01", 1);
        counts.insert("01", 1);
        counts.insert("10", 3);

        assert_eq!(counts.get("01"), 2);
        assert_eq!(counts.get("10"), 3);
        assert_eq!(counts.get("11"), 0);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_most_frequent() {
        let counts: Counts = [("00".to_string(), 7), ("11".to_string(), 3)]
            .into_iter()
            .collect();
        assert_eq!(counts.most_frequent(), Some(("00", 7)));
    }

    #[test]
    fn test_empty_counts() {
        let counts = Counts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.most_frequent(), None);
    }

    #[test]
    fn test_result_roundtrip() {
        let mut counts = Counts::new();
        counts.insert("0", 5);
        let result = ExecutionResult::new(counts, 5).with_execution_time(12);

        let json = serde_json::to_string(&result).unwrap();
        let back: ExecutionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
