use std::path::{Path, PathBuf};
use std::time::Duration;

use junctionflow_core::NetworkConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server settings, read from a TOML file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
    pub network: NetworkConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 10,
            max_concurrent_requests: 256,
            network: NetworkConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(
            ServerConfig::from_toml_str("").unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn partial_file_overrides_given_fields() {
        let config = ServerConfig::from_toml_str(
            r#"
            port = 9000
            request_timeout_secs = 3

            [network]
            roads_path = "/srv/traffic/roads.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.max_concurrent_requests, 256);
        assert_eq!(
            config.network.roads_path,
            PathBuf::from("/srv/traffic/roads.json")
        );
        assert_eq!(
            config.network.junctions_path,
            PathBuf::from("data/junctions.json")
        );
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(matches!(
            ServerConfig::from_toml_str("port = \"eighty\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ServerConfig::load(Some(Path::new("no/such/server.toml"))).unwrap_err();
        assert!(err.to_string().contains("no/such/server.toml"));
    }
}
