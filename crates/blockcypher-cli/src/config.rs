/*
[INPUT]:  YAML configuration file, CLI overrides, BLOCKCYPHER_TOKEN
[OUTPUT]: Resolved client configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use blockcypher_adapter::{BlockcypherClient, ClientConfig, Network};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable consulted for the API token
pub const TOKEN_ENV_VAR: &str = "BLOCKCYPHER_TOKEN";

/// On-disk configuration; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub token: Option<String>,
    /// Full endpoint base, e.g. `https://api.blockcypher.com/v1/btc/test3`.
    /// Takes precedence over `network`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// `<config dir>/blockcypher/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blockcypher").join("config.yaml"))
    }

    /// Load the explicit file, or the default file if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub network: Option<Network>,
    pub token: Option<String>,
    pub base_url: Option<String>,
}

/// Final settings after applying flag > env > file > default
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub client: ClientConfig,
    pub base_url: Option<String>,
}

impl ResolvedConfig {
    pub fn resolve(file: FileConfig, overrides: Overrides, env_token: Option<String>) -> Self {
        let defaults = ClientConfig::default();
        let env_token = env_token.filter(|token| !token.is_empty());

        let client = ClientConfig {
            timeout: file
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            connect_timeout: file
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            network: overrides
                .network
                .or(file.network)
                .unwrap_or(defaults.network),
            token: overrides.token.or(env_token).or(file.token),
        };

        Self {
            client,
            base_url: overrides.base_url.or(file.base_url),
        }
    }

    pub fn build_client(&self) -> Result<BlockcypherClient> {
        let client = match &self.base_url {
            Some(base_url) => {
                BlockcypherClient::with_config_and_base_url(self.client.clone(), base_url)
            }
            None => BlockcypherClient::with_config(self.client.clone()),
        };
        client.context("build BlockCypher client")
    }
}
