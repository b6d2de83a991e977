mod file_config;

pub use file_config::{FileConfig, ReportConfig};

use crate::analysis::AnalysisKind;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub dataset_path: Option<PathBuf>,
    pub skip_checks: bool,
    pub display_limit: usize,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub dataset_path: PathBuf,
    pub skip_checks: bool,

    // Report settings (with defaults)
    pub report: ReportSettings,
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub display_limit: usize,
    pub json: bool,
    /// Analyses to run when the command line selects none.
    pub default_analyses: Option<Vec<AnalysisKind>>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            display_limit: 20,
            json: false,
            default_analyses: None,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        // TOML overrides CLI for each field
        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("dataset_path must be specified via --dataset or in config file")
            })?;

        // Validate dataset_path points at a readable file
        if !dataset_path.exists() {
            bail!("Dataset file does not exist: {:?}", dataset_path);
        }
        if !dataset_path.is_file() {
            bail!("dataset_path is not a file: {:?}", dataset_path);
        }

        let skip_checks = file.skip_checks.unwrap_or(cli.skip_checks);

        // Report settings - merge file config with CLI values
        let report_file = file.report.unwrap_or_default();
        let display_limit = report_file.display_limit.unwrap_or(cli.display_limit);
        let json = report_file.json.unwrap_or(cli.json);

        let default_analyses = match report_file.analyses {
            Some(names) => {
                let mut kinds = Vec::with_capacity(names.len());
                for name in &names {
                    match parse_analysis_name(name) {
                        Some(kind) => kinds.push(kind),
                        None => bail!("Unknown analysis in config file: {}", name),
                    }
                }
                Some(kinds)
            }
            None => None,
        };

        Ok(Self {
            dataset_path,
            skip_checks,
            report: ReportSettings {
                display_limit,
                json,
                default_analyses,
            },
        })
    }
}

/// Parses an analysis value name into AnalysisKind.
/// Uses clap's ValueEnum trait for parsing.
fn parse_analysis_name(s: &str) -> Option<AnalysisKind> {
    AnalysisKind::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn make_temp_dataset() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    #[test]
    fn test_parse_analysis_name() {
        assert!(matches!(
            parse_analysis_name("top10-most-viewed"),
            Some(AnalysisKind::Top10MostViewed)
        ));
        assert!(matches!(
            parse_analysis_name("dance-energy-correlation"),
            Some(AnalysisKind::DanceEnergyCorrelation)
        ));
        // Case insensitive
        assert!(matches!(
            parse_analysis_name("TOTAL-TRACK-COUNT"),
            Some(AnalysisKind::TotalTrackCount)
        ));
        // Invalid
        assert!(parse_analysis_name("invalid").is_none());
    }

    #[test]
    fn test_resolve_cli_only() {
        let dataset = make_temp_dataset();
        let cli = CliConfig {
            dataset_path: Some(dataset.path().to_path_buf()),
            skip_checks: true,
            display_limit: 50,
            json: true,
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.dataset_path, dataset.path());
        assert!(config.skip_checks);
        assert_eq!(config.report.display_limit, 50);
        assert!(config.report.json);
        assert!(config.report.default_analyses.is_none());
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let dataset = make_temp_dataset();
        let cli = CliConfig {
            dataset_path: Some(PathBuf::from("/should/be/overridden")),
            skip_checks: false,
            display_limit: 20,
            json: false,
        };

        let file_config = FileConfig {
            dataset_path: Some(dataset.path().to_string_lossy().to_string()),
            skip_checks: Some(true),
            report: Some(ReportConfig {
                display_limit: Some(5),
                json: None,
                analyses: None,
            }),
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        // TOML values should override CLI
        assert_eq!(config.dataset_path, dataset.path());
        assert!(config.skip_checks);
        assert_eq!(config.report.display_limit, 5);
        // CLI value used when TOML doesn't specify
        assert!(!config.report.json);
    }

    #[test]
    fn test_resolve_missing_dataset_error() {
        let cli = CliConfig::default();
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("dataset_path must be specified"));
    }

    #[test]
    fn test_resolve_nonexistent_dataset_error() {
        let cli = CliConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/path/that/should/not/exist.json")),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_dataset_not_a_file_error() {
        // Point dataset_path at a directory
        let temp_dir = tempfile::TempDir::new().unwrap();
        let cli = CliConfig {
            dataset_path: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a file"));
    }

    #[test]
    fn test_resolve_default_analyses_parsed() {
        let dataset = make_temp_dataset();
        let cli = CliConfig {
            dataset_path: Some(dataset.path().to_path_buf()),
            ..Default::default()
        };

        let file_config = FileConfig {
            report: Some(ReportConfig {
                analyses: Some(vec![
                    "top10-most-viewed".to_string(),
                    "total-track-count".to_string(),
                ]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();
        assert_eq!(
            config.report.default_analyses,
            Some(vec![
                AnalysisKind::Top10MostViewed,
                AnalysisKind::TotalTrackCount,
            ])
        );
    }

    #[test]
    fn test_resolve_unknown_analysis_error() {
        let dataset = make_temp_dataset();
        let cli = CliConfig {
            dataset_path: Some(dataset.path().to_path_buf()),
            ..Default::default()
        };

        let file_config = FileConfig {
            report: Some(ReportConfig {
                analyses: Some(vec!["not-an-analysis".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let result = AppConfig::resolve(&cli, Some(file_config));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown analysis in config file"));
    }
}
