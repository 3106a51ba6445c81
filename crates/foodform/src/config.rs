// File: src/config.rs
// Purpose: Configuration parsing from foodform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "foodform.toml";

const DEFAULT_HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub dev: DevConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Shown in the navigation bar
    #[serde(default = "default_name")]
    pub name: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Page rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Script URL for htmx; empty disables partial updates
    #[serde(default = "default_htmx_src")]
    pub htmx_src: String,
}

/// Development configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DevConfig {
    #[serde(default)]
    pub live_reload: bool,
}

// Default values
fn default_name() -> String {
    "foodform".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_title() -> String {
    "Add Food".to_string()
}

fn default_htmx_src() -> String {
    DEFAULT_HTMX_SRC.to_string()
}

// Default implementations
impl Default for ProjectConfig {
    fn default() -> Self {
        Self { name: default_name() }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            htmx_src: default_htmx_src(),
        }
    }
}

impl Config {
    /// Load configuration from a toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./foodform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Apply `HOST`, `PORT` and `LIVE_RELOAD` overrides
    ///
    /// `lookup` is normally `std::env::var(..).ok()`. Unparseable values are
    /// an error.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {:?}", port))?;
        }
        if let Some(live_reload) = lookup("LIVE_RELOAD") {
            self.dev.live_reload = live_reload
                .parse::<bool>()
                .with_context(|| format!("Invalid LIVE_RELOAD value: {:?}", live_reload))?;
        }
        Ok(self)
    }

    /// `host:port` to bind the server to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// htmx script URL, if enabled
    pub fn htmx_src(&self) -> Option<&str> {
        Some(self.page.htmx_src.as_str()).filter(|src| !src.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.project.name, "foodform");
        assert_eq!(config.page.title, "Add Food");
        assert_eq!(config.htmx_src(), Some(DEFAULT_HTMX_SRC));
        assert!(!config.dev.live_reload);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [project]
            name = "Food Finder"

            [page]
            htmx_src = ""
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.project.name, "Food Finder");
        assert_eq!(config.page.title, "Add Food");
        assert_eq!(config.htmx_src(), None);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/foodform.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            [("HOST", "0.0.0.0"), ("PORT", "8080"), ("LIVE_RELOAD", "true")].into();

        let config = Config::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.dev.live_reload);
    }

    #[test]
    fn test_invalid_port_override() {
        let result = Config::default().with_overrides(|key| {
            (key == "PORT").then(|| "eighty".to_string())
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value"));
    }
}
