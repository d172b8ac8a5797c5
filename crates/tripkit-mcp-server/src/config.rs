//! Server configuration loaded from a TOML file

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Per-tool enable flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub hotels: bool,
    pub weather: bool,
    pub activities: bool,
    pub current_date: bool,
    pub recipes: bool,
    pub fridge: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3333,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            hotels: true,
            weather: true,
            activities: true,
            current_date: true,
            recipes: true,
            fridge: true,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3333);
        assert!(config.tools.hotels);
        assert!(config.tools.current_date);
        assert!(config.tools.recipes);
        assert!(config.tools.fridge);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 8080\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.tools.weather);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.tools.weather = false;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert!(!parsed.tools.weather);
        assert_eq!(parsed.server.port, config.server.port);
    }
}
