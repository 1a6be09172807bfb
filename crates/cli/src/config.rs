//! Runner configuration loaded from `stackhook.toml`.

use std::path::Path;

use serde::Deserialize;
use stackhook_aws::AwsBaseConfig;
use thiserror::Error;

/// Errors loading the runner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Contents of `stackhook.toml`. Every field is optional.
///
/// ```toml
/// project_code = "acme"
///
/// [aws]
/// region = "eu-west-1"
/// role_arn = "arn:aws:iam::123456789012:role/deployer"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Project code used when `--project-code` is not given.
    pub project_code: Option<String>,
    /// AWS connection settings.
    pub aws: AwsBaseConfig,
}

impl RunnerConfig {
    /// Load the config file at `path`, or defaults if it does not exist.
    ///
    /// The second value reports whether the file was found.
    pub fn load(path: &Path) -> Result<(Self, bool), ConfigError> {
        if !path.exists() {
            return Ok((Self::default(), false));
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok((config, true))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
