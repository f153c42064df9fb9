//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading policy
//! configuration from YAML or JSON files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to policy configuration.
///
/// The file format is chosen from the extension: `.json` is read with
/// `serde_json`, everything else (normally `.yaml` or `.yml`) with
/// `serde_yaml`.
///
/// # File Layout
///
/// ```text
/// salaried:
///   bonus_percent: 0.10
/// hourly:
///   bonus_threshold: 160
///   bonus_amount: 100
/// vacation:            # optional
///   initial_days: 25
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payment_policies.yaml")?;
/// println!("Salaried bonus: {}", loader.config().salaried.bonus_percent);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file is not valid YAML/JSON or lacks a required field (`ConfigParseError`)
    /// - A value is out of range, e.g. a negative bonus (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| {
            warn!(path = %path_str, "Policy configuration not found");
            EngineError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::parse_json(&content, &path_str)?
        } else {
            Self::parse_yaml(&content, &path_str)?
        };

        config
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            })?;

        info!(
            path = %path_str,
            bonus_percent = %config.salaried.bonus_percent,
            bonus_threshold = config.hourly.bonus_threshold,
            bonus_amount = %config.hourly.bonus_amount,
            "Loaded policy configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    fn parse_yaml(content: &str, path: &str) -> EngineResult<PolicyConfig> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn parse_json(content: &str, path: &str) -> EngineResult<PolicyConfig> {
        serde_json::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PolicyConfig {
        self.config
    }
}
