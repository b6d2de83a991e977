use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub dataset_path: Option<String>,
    pub skip_checks: Option<bool>,

    // Feature configs
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum rows printed per result table, 0 for no limit.
    pub display_limit: Option<usize>,
    /// Emit the report as JSON instead of tables.
    pub json: Option<bool>,
    /// Analyses to run when none are selected on the command line,
    /// by value name, e.g. "top10-most-viewed".
    pub analyses: Option<Vec<String>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
