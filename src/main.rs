use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod analysis;
use analysis::{AnalysisKind, Analyzer};

mod cli_style;

mod config;
use config::{AppConfig, CliConfig, FileConfig};

mod dataset;
use dataset::load_dataset;

mod engine;

mod report;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON dataset file.
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Path to a TOML config file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Analysis to run; repeat the flag to select several.
    /// When omitted, runs the configured default set, or all of them.
    #[clap(short, long)]
    pub analysis: Vec<AnalysisKind>,

    /// Album name for the album-scoped analyses.
    #[clap(long)]
    pub album: Option<String>,

    /// Emit the report as JSON on stdout instead of tables.
    #[clap(long)]
    pub json: bool,

    /// The maximum number of rows printed per result table. Set to 0 to disable the limit.
    #[clap(long, default_value_t = 20)]
    pub display_limit: usize,

    /// Skip per-record schema validation of the dataset.
    #[clap(long)]
    pub skip_checks: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        dataset_path: cli_args.dataset.clone(),
        skip_checks: cli_args.skip_checks,
        display_limit: cli_args.display_limit,
        json: cli_args.json,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let store = load_dataset(&config.dataset_path, !config.skip_checks)?;
    let analyzer = Analyzer::new(&store);

    let album = cli_args.album.as_deref();

    // Album-scoped analyses only join the implicit set when an album was
    // named; selecting them explicitly without one reports the problem.
    let selected: Vec<AnalysisKind> = if !cli_args.analysis.is_empty() {
        cli_args.analysis.clone()
    } else {
        let defaults = config
            .report
            .default_analyses
            .clone()
            .unwrap_or_else(|| AnalysisKind::ALL.to_vec());
        if album.is_none() {
            defaults.into_iter().filter(|k| !k.requires_album()).collect()
        } else {
            defaults
        }
    };

    info!("Running {} analyses", selected.len());

    if config.report.json {
        let mut results = serde_json::Map::new();
        for kind in &selected {
            results.insert(
                kind.key().to_string(),
                report::analysis_json(&analyzer, *kind, album),
            );
        }
        let output = serde_json::Value::Object(results);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for kind in &selected {
            report::print_analysis(&analyzer, *kind, album, config.report.display_limit);
        }
    }

    Ok(())
}
