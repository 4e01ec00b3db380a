//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Rate applied when no tariff is configured, per kWh
pub const DEFAULT_RATE_PER_KWH: f64 = 5.5;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("energy-advisor");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "ru"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code (RUB, EUR, USD, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Rate used when no tariff applies
    #[serde(default = "default_rate")]
    pub default_rate_per_kwh: f64,
}

fn default_currency() -> String { "RUB".to_string() }
fn default_currency_symbol() -> String { "\u{20BD}".to_string() } // Ruble sign
fn default_rate() -> f64 { DEFAULT_RATE_PER_KWH }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            default_rate_per_kwh: default_rate(),
        }
    }
}

/// History and listing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Days covered by the daily history view
    #[serde(default = "default_daily_history_days")]
    pub daily_history_days: u32,
    /// Months covered by the monthly history view
    #[serde(default = "default_monthly_history_months")]
    pub monthly_history_months: u32,
    /// Number of appliances in the top consumers list
    #[serde(default = "default_top_consumers")]
    pub top_consumers_limit: usize,
}

fn default_daily_history_days() -> u32 { 30 }
fn default_monthly_history_months() -> u32 { 12 }
fn default_top_consumers() -> usize { 5 }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            daily_history_days: default_daily_history_days(),
            monthly_history_months: default_monthly_history_months(),
            top_consumers_limit: default_top_consumers(),
        }
    }
}

/// Recommendation thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// How many of the biggest consumers are checked against the threshold
    #[serde(default = "default_top_consumers")]
    pub top_consumers: usize,
    /// Daily kWh above which an appliance is flagged
    #[serde(default = "default_high_consumption_kwh")]
    pub high_consumption_kwh: f64,
    /// Daily kWh above which the appliance tip becomes a warning
    #[serde(default = "default_warning_kwh")]
    pub warning_kwh: f64,
}

fn default_high_consumption_kwh() -> f64 { 2.0 }
fn default_warning_kwh() -> f64 { 5.0 }

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            top_consumers: default_top_consumers(),
            high_consumption_kwh: default_high_consumption_kwh(),
            warning_kwh: default_warning_kwh(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("[general]\nlanguage = \"ru\"\n").unwrap();

        assert_eq!(config.general.language, "ru");
        assert_eq!(config.pricing.default_rate_per_kwh, 5.5);
        assert_eq!(config.analysis.daily_history_days, 30);
        assert_eq!(config.advisor.top_consumers, 5);
        assert_eq!(config.advisor.high_consumption_kwh, 2.0);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.pricing.currency = "EUR".to_string();
        config.advisor.warning_kwh = 8.0;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();

        assert_eq!(parsed.pricing.currency, "EUR");
        assert_eq!(parsed.advisor.warning_kwh, 8.0);
        assert_eq!(parsed.general.language, "auto");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::parse("general = [").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
