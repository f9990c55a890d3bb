use crate::error::{BlockPressError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Directory uploaded images are read from.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    /// URL path the uploads directory is served under.
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

fn default_port() -> u16 {
    8080
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

fn default_public_path() -> String {
    "/images".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
            public_path: default_public_path(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_path(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            BlockPressError::Config(format!("Failed to read config file '{}': {}", path, e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[content]\nuploads_dir = \"media\"\npublic_path = \"/media\"\n"
        )
        .unwrap();

        let config = Config::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.content.uploads_dir, "media");
        assert_eq!(config.content.public_path, "/media");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 3000\n").unwrap();

        let config = Config::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content.uploads_dir, "uploads");
        assert_eq!(config.content.public_path, "/images");
    }
}
