//! Run settings for the generator.
//!
//! [`SimulationConfig::load`] reads `config/config.toml` (optional) and then
//! environment variables prefixed with `RETAILSIM__`, e.g.
//! `RETAILSIM__SIMULATION__SEED=7`.

use crate::error::{Result, RetailError};
use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    /// Reference date for purchase order status; today when unset.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_seed() -> u64 {
    42
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 27).unwrap_or_default()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            as_of: None,
            output_dir: default_output_dir(),
        }
    }
}

impl SimulationConfig {
    /// Load settings from [`DEFAULT_CONFIG_PATH`], falling back to env vars.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from the given TOML file (optional) overlaid by env vars.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("RETAILSIM").separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // File existed but could not be parsed; keep going with env only
                if path.exists() {
                    log::warn!(
                        "failed to load {}, falling back to env. Error: {}",
                        path.display(),
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix("RETAILSIM").separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        // A missing [simulation] section just means "all defaults"
        let sim_config = match settings.get::<SimulationConfig>("simulation") {
            Ok(cfg) => cfg,
            Err(ConfigError::NotFound(_)) => SimulationConfig::default(),
            Err(e) => {
                return Err(ConfigError::Message(format!(
                    "Simulation configuration could not be loaded from file or environment: {}",
                    e
                ))
                .into())
            }
        };

        sim_config.validate()?;
        Ok(sim_config)
    }

    /// Reject horizons that would produce no days.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(RetailError::InvalidSettings(format!(
                "end_date {} is before start_date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Reference date used to decide whether a purchase order has arrived.
    pub fn reference_date(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_the_180_day_horizon() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!((cfg.end_date - cfg.start_date).num_days() + 1, 180);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn load_reads_simulation_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[simulation]\nseed = 7\nstart_date = \"2024-01-01\"\nend_date = \"2024-01-31\"\nas_of = \"2024-03-01\""
        )
        .unwrap();

        let cfg = SimulationConfig::load_from(&path).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cfg.end_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(cfg.reference_date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(cfg.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn inverted_horizon_is_rejected() {
        let cfg = SimulationConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(RetailError::InvalidSettings(_))
        ));
    }
}
