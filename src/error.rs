//! Error handling for capital-gains
//!
//! Defines the typed errors of the tool and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Errors raised by the tool around the calculator
#[derive(Error, Debug)]
pub enum CapitalGainsError {
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Result type alias for application-level operations
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting_is_readable() {
        let err = CapitalGainsError::ConfigError("tax_rate must be between 0 and 1".to_string());
        assert_eq!(
            err.to_string(),
            "config error: tax_rate must be between 0 and 1"
        );
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> =
            Err(CapitalGainsError::ConfigError("tax_rate must not be negative".to_string()).into());
        let err = result.context("failed to load config").unwrap_err();

        assert_eq!(err.to_string(), "failed to load config");
        let debug_msg = format!("{:?}", err);
        assert!(debug_msg.contains("config error: tax_rate must not be negative"));
    }
}
