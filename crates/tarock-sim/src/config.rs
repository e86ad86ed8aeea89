use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tarock_bot::{BidThresholds, BidderKind, UnknownBidder};
use thiserror::Error;
use tracing::Level;

/// Root simulation configuration loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SimulationConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.strategy.validate()?;
        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!(
                    "unknown level '{}' (expected trace, debug, info, warn or error)",
                    self.logging.tracing_level
                ),
            });
        }
        Ok(())
    }
}

/// Which strategies the seats use.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StrategyConfig {
    #[serde(default = "default_bidder")]
    pub bidder: String,
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            bidder: default_bidder(),
            thresholds: None,
        }
    }
}

impl StrategyConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.bidder_kind()?;
        if let Some(thresholds) = &self.thresholds {
            if !thresholds.to_thresholds().is_ascending() {
                return Err(ValidationError::InvalidField {
                    field: "strategy.thresholds".to_string(),
                    message: "thresholds must not decrease from small to solo".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn bidder_kind(&self) -> Result<BidderKind, ValidationError> {
        self.bidder
            .parse()
            .map_err(|err: UnknownBidder| ValidationError::InvalidField {
                field: "strategy.bidder".to_string(),
                message: err.to_string(),
            })
    }

    /// Thresholds from the file, else the environment-adjusted defaults.
    pub fn resolved_thresholds(&self) -> BidThresholds {
        self.thresholds
            .as_ref()
            .map(ThresholdsConfig::to_thresholds)
            .unwrap_or_else(BidThresholds::from_env)
    }
}

fn default_bidder() -> String {
    BidderKind::default().as_str().to_string()
}

/// Per-rung hand strength a threshold bidder must exceed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ThresholdsConfig {
    pub small: u32,
    pub under: u32,
    pub over: u32,
    pub solo: u32,
}

impl ThresholdsConfig {
    pub fn to_thresholds(&self) -> BidThresholds {
        BidThresholds {
            small: self.small,
            under: self.under,
            over: self.over,
            solo: self.solo,
        }
    }
}

/// Diagnostic output settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
