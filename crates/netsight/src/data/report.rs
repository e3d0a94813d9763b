//! Exported simulation reports.
//!
//! A report is a snapshot of one simulation: parameters, link budget,
//! metrics and every chart series, stamped with the time it was generated.
//! YAML is the default format; a `.json` path selects JSON.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use netsight_core::SimulationOutcome;
use serde::{Deserialize, Serialize};

use crate::util::io::atomic_write;

#[derive(Debug)]
pub enum ReportError {
    Io(String),
    Serialize(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(msg) => write!(f, "IO error: {}", msg),
            ReportError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

impl ReportFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Yaml,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Yaml => "yaml",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub generated_at: Timestamp,
    pub generator: String,
    pub simulation: SimulationOutcome,
}

impl SimulationReport {
    pub fn new(simulation: SimulationOutcome, generated_at: Timestamp) -> Self {
        Self {
            generated_at,
            generator: format!("netsight {}", env!("CARGO_PKG_VERSION")),
            simulation,
        }
    }

    /// Default file name, e.g. `netsight_report_20261017T093000.250Z.yaml`
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "netsight_report_{}.{}",
            self.generated_at.strftime("%Y%m%dT%H%M%S%.3fZ"),
            format.extension()
        )
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Yaml => serde_saphyr::to_string(self)
                .map_err(|e| ReportError::Serialize(format!("Failed to serialize report: {}", e))),
            ReportFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ReportError::Serialize(format!("Failed to serialize report: {}", e))),
        }
    }

    /// Write the report to `path`, or into `dir` under its default name.
    pub fn save(&self, path: Option<&Path>, dir: &Path) -> Result<PathBuf, ReportError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => dir.join(self.file_name(ReportFormat::Yaml)),
        };
        let content = self.render(ReportFormat::from_path(&path))?;

        atomic_write(&path, &content)
            .map_err(|e| ReportError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "Report written");
        Ok(path)
    }
}
