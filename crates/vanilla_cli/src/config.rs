//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`VANILLA_*`)
//! 3. Config file
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "VANILLA_LOG_LEVEL";
/// Environment variable for the binomial tree step count.
pub const ENV_STEPS: &str = "VANILLA_STEPS";
/// Environment variable for the Monte Carlo sample count.
pub const ENV_SIMULATIONS: &str = "VANILLA_SIMULATIONS";
/// Environment variable for the Monte Carlo seed.
pub const ENV_SEED: &str = "VANILLA_SEED";
/// Environment variable for the output format.
pub const ENV_FORMAT: &str = "VANILLA_FORMAT";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Output format for prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// General CLI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Output format
    pub format: OutputFormat,
}

/// Engine settings
///
/// Counts are passed through to the pricer unchecked so that its
/// `InvalidConfig` message reaches the user; `None` means engine default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Binomial tree steps
    pub steps: Option<i64>,
    /// Monte Carlo sample count
    pub num_simulations: Option<i64>,
    /// Monte Carlo seed
    pub seed: Option<u64>,
    /// Monte Carlo antithetic variates
    pub antithetic: bool,
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Engine settings
    pub pricing: PricingConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override settings from an arbitrary variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.general.log_level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.general.format = format.parse()?;
        }
        if let Some(steps) = lookup(ENV_STEPS) {
            self.pricing.steps = Some(parse_var(ENV_STEPS, &steps)?);
        }
        if let Some(n) = lookup(ENV_SIMULATIONS) {
            self.pricing.num_simulations = Some(parse_var(ENV_SIMULATIONS, &n)?);
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.pricing.seed = Some(parse_var(ENV_SEED, &seed)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.general.log_level = level.parse()?;
        }
        if let Some(format) = &cli.format {
            self.general.format = format.parse()?;
        }
        if cli.steps.is_some() {
            self.pricing.steps = cli.steps;
        }
        if cli.num_simulations.is_some() {
            self.pricing.num_simulations = cli.num_simulations;
        }
        if cli.seed.is_some() {
            self.pricing.seed = cli.seed;
        }
        if cli.antithetic {
            self.pricing.antithetic = true;
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Tree steps override
    pub steps: Option<i64>,
    /// Monte Carlo sample count override
    pub num_simulations: Option<i64>,
    /// Seed override
    pub seed: Option<u64>,
    /// Enable antithetic variates
    pub antithetic: bool,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |var| std::env::var(var).ok())
}

/// Build configuration with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.general.log_level, LogLevel::Warn);
        assert_eq!(config.general.format, OutputFormat::Text);
        assert_eq!(config.pricing.steps, None);
        assert_eq!(config.pricing.seed, None);
        assert!(!config.pricing.antithetic);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(
            OutputFormat::from_str("csv").unwrap_err(),
            ConfigError::InvalidFormat("csv".to_string())
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = CliConfig::from_file("/nonexistent/vanilla.toml").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
[general]
log_level = "debug"
format = "json"

[pricing]
steps = 500
num_simulations = 20000
seed = 42
"#,
        );
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.general.log_level, LogLevel::Debug);
        assert_eq!(config.general.format, OutputFormat::Json);
        assert_eq!(config.pricing.steps, Some(500));
        assert_eq!(config.pricing.num_simulations, Some(20_000));
        assert_eq!(config.pricing.seed, Some(42));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let file = write_config("[general\nlog_level = ");
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_from(env(&[
                (ENV_LOG_LEVEL, "info"),
                (ENV_STEPS, "300"),
                (ENV_SIMULATIONS, "5000"),
                (ENV_SEED, "7"),
                (ENV_FORMAT, "json"),
            ]))
            .unwrap();
        assert_eq!(config.general.log_level, LogLevel::Info);
        assert_eq!(config.general.format, OutputFormat::Json);
        assert_eq!(config.pricing.steps, Some(300));
        assert_eq!(config.pricing.num_simulations, Some(5000));
        assert_eq!(config.pricing.seed, Some(7));
    }

    #[test]
    fn test_env_invalid_value() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env_from(env(&[(ENV_SEED, "abc")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: ENV_SEED,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let file = write_config(
            r#"
[general]
format = "json"

[pricing]
steps = 100
num_simulations = 1000
seed = 1
"#,
        );
        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            steps: Some(400),
            ..CliArgs::default()
        };
        let config = build_config_with_env(
            &cli,
            env(&[(ENV_STEPS, "200"), (ENV_SIMULATIONS, "2000")]),
        )
        .unwrap();

        // CLI beats env and file
        assert_eq!(config.pricing.steps, Some(400));
        // Env beats file
        assert_eq!(config.pricing.num_simulations, Some(2000));
        // File beats defaults
        assert_eq!(config.pricing.seed, Some(1));
        assert_eq!(config.general.format, OutputFormat::Json);
        // Defaults fill the rest
        assert_eq!(config.general.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_invalid_log_level() {
        let cli = CliArgs {
            log_level: Some("loud".to_string()),
            ..CliArgs::default()
        };
        assert_eq!(
            build_config_with_env(&cli, env(&[])).unwrap_err(),
            ConfigError::InvalidLogLevel("loud".to_string())
        );
    }
}
