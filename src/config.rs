//! Service configuration: a TOML file when one is supplied, environment
//! overrides on top. The admin allow-list holds external user identifiers as
//! issued by the identity provider.

use std::{env, fmt, fs, io, path::Path};

use serde::Deserialize;

pub const ENV_ADMIN_IDS: &str = "FAIRWAY_ADMIN_IDS";
pub const ENV_BIND: &str = "FAIRWAY_BIND";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket address the server listens on.
    pub bind: String,
    /// External user ids allowed to call mutating endpoints.
    pub admin_user_ids: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            admin_user_ids: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(ConfigError::Io)?;
                toml::from_str(&raw)
                    .map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            None => Self::default(),
        };

        if let Ok(ids) = env::var(ENV_ADMIN_IDS) {
            config.admin_user_ids = ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Ok(bind) = env::var(ENV_BIND) {
            config.bind = bind;
        }

        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
