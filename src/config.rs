//! Run settings: defaults, optional YAML file, command-line overrides.
//!
//! Precedence is CLI flag, then YAML file, then the built-in default.
//!
//! ```yaml
//! base_url: https://edition.cnn.com/
//! categories: [world, politics]
//! timeout_secs: 10
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://cnn.com/";
pub const DEFAULT_CATEGORIES: &[&str] = &["style", "entertainment", "business"];
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONCURRENCY: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("no categories configured")]
    NoCategories,
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Contents of the optional YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub categories: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
    pub with_urls: Option<bool>,
}

impl FileConfig {
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_yaml(&yaml, path)?;
        debug!(?config, "Loaded config file");
        Ok(config)
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub categories: Vec<String>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
    pub with_urls: bool,
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Url,
    pub categories: Vec<String>,
    pub timeout: Duration,
    pub concurrency: usize,
    pub with_urls: bool,
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let raw_base = overrides
            .base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|source| ConfigError::BaseUrl {
            url: raw_base.clone(),
            source,
        })?;

        let categories = if !overrides.categories.is_empty() {
            overrides.categories
        } else if let Some(categories) = file.categories {
            categories
        } else {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        };
        if categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::Zero("timeout_secs"));
        }

        let concurrency = overrides
            .concurrency
            .or(file.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY);
        if concurrency == 0 {
            return Err(ConfigError::Zero("concurrency"));
        }

        Ok(Settings {
            base_url,
            categories,
            timeout: Duration::from_secs(timeout_secs),
            concurrency,
            with_urls: overrides.with_urls || file.with_urls.unwrap_or(false),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            with_urls: false,
        }
    }
}
