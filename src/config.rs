//! Configuration System
//!
//! Handles loading configuration from TOML files and environment variable
//! overrides. The result store itself takes no configuration beyond the
//! file list it is given; everything here parameterizes file selection and
//! the report generator.

use crate::report::{self, MetricLabel};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub results: ResultsConfig,

    #[serde(default)]
    pub report: ReportSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where to find simulation result files
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsConfig {
    #[serde(default = "default_results_dir")]
    pub dir: PathBuf,
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("simulations/results")
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            dir: default_results_dir(),
        }
    }
}

/// Report generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Metrics to report on; empty means the built-in routing metrics
    #[serde(default)]
    pub metrics: Vec<MetricEntry>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("analysis")
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            metrics: Vec::new(),
        }
    }
}

/// One configured metric: scalar key plus display label
#[derive(Debug, Clone, Deserialize)]
pub struct MetricEntry {
    pub key: String,
    pub label: String,
}

impl ReportSection {
    /// Build the report generator's configuration from this section
    pub fn to_report_config(&self) -> report::ReportConfig {
        let metrics = if self.metrics.is_empty() {
            report::default_metrics()
        } else {
            self.metrics
                .iter()
                .map(|m| MetricLabel::new(&m.key, &m.label))
                .collect()
        };

        report::ReportConfig {
            output_dir: self.output_dir.clone(),
            metrics,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("swarmscope").join("config.toml")),
            Some(PathBuf::from("./swarmscope.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("SWARMSCOPE_RESULTS_DIR") {
            self.results.dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("SWARMSCOPE_OUTPUT_DIR") {
            self.report.output_dir = PathBuf::from(dir);
        }
        if let Ok(level) = std::env::var("SWARMSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SWARMSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Swarmscope Configuration
#
# Environment variables override these settings:
# - SWARMSCOPE_RESULTS_DIR
# - SWARMSCOPE_OUTPUT_DIR
# - SWARMSCOPE_LOG_LEVEL
# - SWARMSCOPE_LOG_FORMAT

[results]
# Directory containing simulator .sca result files
dir = "simulations/results"

[report]
# Directory for generated artifacts
output_dir = "analysis"

# Metrics to report on (omit for the built-in routing metrics)
#
# [[report.metrics]]
# key = "routeDiscovered:count"
# label = "Routes Discovered"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
