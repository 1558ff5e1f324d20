use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
}

/// Network listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml`, falling back to defaults when
    /// the file is absent. The `PORT` environment variable overrides the
    /// configured port.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_PATH);

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse()?;
        }

        Ok(config)
    }
}
