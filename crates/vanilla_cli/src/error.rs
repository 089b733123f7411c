//! CLI error types

use thiserror::Error;
use vanilla_core::types::PricingError;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Output serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialisation(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Serialisation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn test_pricing_error_message_is_preserved() {
        let err: CliError = PricingError::InvalidMaturity { maturity: 0.0 }.into();
        assert_eq!(
            err.to_string(),
            "Pricing error: Invalid maturity: T = 0 (must be > 0)"
        );
    }

    #[test]
    fn test_unreadable_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_file(dir.path()).unwrap_err();
        let err = CliError::from(err);
        assert!(matches!(err, CliError::Config(ConfigError::FileError(_))));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("loud"));
    }
}
