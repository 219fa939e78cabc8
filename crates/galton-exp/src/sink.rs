//! Results sink: structured persistence of experiment outputs.
//!
//! Each experiment writes two artifacts under the sink root:
//!
//! - `{name}_metadata.json`: the [`ExperimentRecord`] summary, pretty-printed.
//! - `{name}_distribution.csv`: per-bin table with the grouped distribution
//!   and its normal reference, one row per center.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::Analysis;
use crate::error::{ExpError, ExpResult};
use crate::record::ExperimentRecord;

/// Writes experiment artifacts into a target directory.
#[derive(Debug, Clone)]
pub struct ResultsSink {
    root: PathBuf,
}

impl ResultsSink {
    /// Sink rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the sink writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist both artifacts for a finished experiment.
    pub fn write(&self, record: &ExperimentRecord, analysis: &Analysis) -> ExpResult<()> {
        std::fs::create_dir_all(&self.root)?;

        let metadata_path = self.root.join(format!("{}_metadata.json", record.name));
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&metadata_path, json)?;

        let csv_path = self.root.join(format!("{}_distribution.csv", record.name));
        std::fs::write(&csv_path, distribution_csv(analysis)?)?;

        info!(
            "wrote {} and {}",
            metadata_path.display(),
            csv_path.display()
        );
        Ok(())
    }
}

fn distribution_csv(analysis: &Analysis) -> ExpResult<String> {
    let mut out = String::from("center,probability,reference\n");
    for ((center, p), q) in analysis
        .centers
        .iter()
        .zip(&analysis.grouped)
        .zip(&analysis.reference)
    {
        writeln!(out, "{center},{p},{q}")
            .map_err(|e| ExpError::Export(format!("CSV formatting failed: {e}")))?;
    }
    Ok(out)
}
