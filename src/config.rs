//! Calculator configuration
//!
//! Settings are read from a TOML file. Every key is optional and falls back
//! to the Brazilian swing-trade defaults (R$ 20.000 exemption, 20% rate).
//!
//! ```toml
//! exemption_threshold = 20000
//! tax_rate = "0.20"
//! average_price_on_sell = "hold"
//! ```

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CapitalGainsError;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "CAPITAL_GAINS_CONFIG";

const CONFIG_DIR: &str = "capital-gains";
const CONFIG_FILENAME: &str = "config.toml";

/// How the average price reacts to a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AveragePriceOnSell {
    /// Cost basis per share is unchanged by a disposal
    #[default]
    Hold,
    /// Re-run the purchase blend with the post-sale position and the sale price
    Reblend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxConfig {
    /// Gross sale value at or below which a sale is exempt
    pub exemption_threshold: Decimal,
    /// Fraction of the net gain owed as tax
    pub tax_rate: Decimal,
    pub average_price_on_sell: AveragePriceOnSell,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            exemption_threshold: Decimal::from(20000),
            tax_rate: Decimal::new(20, 2),
            average_price_on_sell: AveragePriceOnSell::Hold,
        }
    }
}

impl TaxConfig {
    pub fn validate(&self) -> Result<(), CapitalGainsError> {
        if self.exemption_threshold < Decimal::ZERO {
            return Err(CapitalGainsError::ConfigError(format!(
                "exemption_threshold must not be negative (got {})",
                self.exemption_threshold
            )));
        }

        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(CapitalGainsError::ConfigError(format!(
                "tax_rate must be between 0 and 1 (got {})",
                self.tax_rate
            )));
        }

        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TaxConfig = toml::from_str(content).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to load config file {}", path.display()))
    }

    /// Resolve the active configuration.
    ///
    /// Lookup order: explicit path, `CAPITAL_GAINS_CONFIG`, the user config
    /// directory. Explicit paths must exist; the user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                debug!("Loading config from ${} = {}", CONFIG_ENV_VAR, path);
                return Self::from_file(Path::new(&path));
            }
        }

        if let Some(path) = default_config_path().filter(|p| p.is_file()) {
            debug!("Loading config from {}", path.display());
            return Self::from_file(&path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}
