//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the quote
//! engine configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CompanyProfile, QuoteConfig, ServerConfig};

/// Loads and provides access to the quote engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/leo/
/// ├── company.yaml   # Issuer shown on exported quotes
/// └── server.yaml    # HTTP bind settings
/// ```
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/leo")?;
/// println!("Issuing quotes as {}", loader.company().name);
/// # Ok::<(), quote_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: QuoteConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if either file is missing and
    /// `ConfigParseError` if either contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyProfile>(&path.join("company.yaml"))?;
        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;

        Ok(Self {
            config: QuoteConfig::new(company, server),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        self.config.company()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }
}
