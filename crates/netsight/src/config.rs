//! User configuration stored in `config.yaml` under the data directory.
//!
//! ```yaml
//! defaults:
//!   networkType: 5G
//!   modulation: 64-QAM
//!   channelCoding: LDPC
//!   bandwidth: 20
//!   distance: 500
//!   noiseLevel: -95
//! suggestion:
//!   command: ["netsight-llm-bridge", "--model", "small"]
//!   goal: balanced
//!   constraints: urban macro cell
//! report_dir: /home/me/reports
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use netsight_core::SimulationParameters;
use netsight_core::suggest::SuggestionGoal;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.yaml";

/// Error types for configuration and parameter files
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// How to reach the language model that suggests parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Program and arguments; empty disables suggestions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(default)]
    pub goal: SuggestionGoal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Parameters the dashboard and CLI start from
    #[serde(default)]
    pub defaults: SimulationParameters,
    #[serde(default)]
    pub suggestion: SuggestionConfig,
    /// Where exported reports go (default: `<data_dir>/reports`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Load `config.yaml` from the data directory; a missing file yields defaults.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        // Bad defaults are reported here rather than on first use
        config
            .defaults
            .validate()
            .map_err(|e| ConfigError::Parse(format!("{}: defaults: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Write the config file, creating the data directory if needed
    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let yaml = self
            .to_yaml()
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {}", e)))?;
        crate::util::io::atomic_write(&data_dir.join(CONFIG_FILE), &yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))
    }

    pub fn report_dir(&self, data_dir: &Path) -> PathBuf {
        self.report_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("reports"))
    }
}

/// Default data directory (`~/.netsight/`)
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".netsight")
}

/// Read a standalone parameters file (YAML; JSON is valid YAML too).
pub fn load_parameters(path: &Path) -> Result<SimulationParameters, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_saphyr::from_str(&content)
        .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
}
