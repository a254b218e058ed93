//! Configuration
//!
//! Every field has a built-in default matching the stock Asset Host setup,
//! so an absent config file is a valid setup.

use crate::infrastructure::probe::DEFAULT_PROBE_TIMEOUT_MS;
use crate::scene::variant::SceneVariant;
use crate::util::errors::{VisuweaveError, VisuweaveResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_IMAGES_DIR: &str = "public/images";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/images/";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub images_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }
}

impl HostConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ResolverConfig {
    pub base_url: String,
    /// Overrides the variant's extension order when set.
    pub extensions: Option<Vec<String>>,
    pub probe_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            extensions: None,
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AppConfig {
    pub variant: SceneVariant,
    pub host: HostConfig,
    pub resolver: ResolverConfig,
}

impl AppConfig {
    pub fn extensions(&self) -> Vec<String> {
        match &self.resolver.extensions {
            Some(extensions) => extensions.clone(),
            None => self
                .variant
                .extensions()
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.resolver.probe_timeout_ms)
    }

    pub fn validate(&self) -> VisuweaveResult<()> {
        if self.resolver.base_url.trim().is_empty() {
            return Err(VisuweaveError::config("resolver.base_url must not be empty"));
        }

        if let Some(extensions) = &self.resolver.extensions {
            if extensions.is_empty() {
                return Err(VisuweaveError::config(
                    "resolver.extensions must list at least one extension",
                ));
            }
            if let Some(bad) = extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
                return Err(VisuweaveError::config(format!(
                    "Invalid extension '{}': extensions must look like '.png'",
                    bad
                )));
            }
        }

        if self.resolver.probe_timeout_ms == 0 {
            return Err(VisuweaveError::config("resolver.probe_timeout_ms must be positive"));
        }

        Ok(())
    }

    fn normalize(mut self) -> Self {
        if !self.resolver.base_url.ends_with('/') {
            self.resolver.base_url.push('/');
        }
        self
    }
}

pub struct ConfigManager;

impl ConfigManager {
    /// `~/.config/visuweave/config.toml` (platform equivalent).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("visuweave").join(CONFIG_FILE_NAME))
    }

    /// Loads an explicit config file, else the user config when present,
    /// else defaults. An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> VisuweaveResult<AppConfig> {
        if let Some(path) = path {
            return Self::load_file(path);
        }

        match Self::user_config_path() {
            Some(user_path) if user_path.is_file() => match Self::load_file(&user_path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    warn!(
                        "Ignoring invalid user config, using defaults: path={}, error={}",
                        user_path.display(),
                        e
                    );
                    Ok(AppConfig::default())
                }
            },
            _ => {
                debug!("No config file found, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    pub fn load_file(path: &Path) -> VisuweaveResult<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VisuweaveError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        debug!("Loaded config file: path={}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> VisuweaveResult<AppConfig> {
        let config: AppConfig = toml::from_str(content)?;
        let config = config.normalize();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_builtin_defaults() {
        let config = ConfigManager::from_toml_str("").unwrap();
        assert_eq!(config.variant, SceneVariant::Noun);
        assert_eq!(config.host.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.host.images_dir, PathBuf::from("public/images"));
        assert_eq!(config.resolver.base_url, "http://localhost:5000/images/");
        assert_eq!(config.extensions(), vec![".jpg", ".png", ".jpeg", ".webp"]);
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn sections_override_defaults() {
        let config = ConfigManager::from_toml_str(
            r#"
variant = "object"

[host]
port = 8080
images_dir = "/srv/images"

[resolver]
base_url = "http://assets.local/images"
probe_timeout_ms = 250
"#,
        )
        .unwrap();

        assert_eq!(config.variant, SceneVariant::Object);
        assert_eq!(config.host.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.resolver.base_url, "http://assets.local/images/");
        assert_eq!(config.extensions(), vec![".png", ".jpg", ".jpeg", ".webp"]);
        assert_eq!(config.probe_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn extension_override_is_validated() {
        let config =
            ConfigManager::from_toml_str("[resolver]\nextensions = [\".webp\", \".png\"]\n").unwrap();
        assert_eq!(config.extensions(), vec![".webp", ".png"]);

        let err = ConfigManager::from_toml_str("[resolver]\nextensions = []\n").unwrap_err();
        assert!(matches!(err, VisuweaveError::Config(_)));

        let err = ConfigManager::from_toml_str("[resolver]\nextensions = [\"png\"]\n").unwrap_err();
        assert!(err.to_string().contains("'png'"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigManager::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(matches!(err, VisuweaveError::Config(_)));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "variant = \"object\"\n").unwrap();

        let config = ConfigManager::load(Some(path.as_path())).unwrap();
        assert_eq!(config.variant, SceneVariant::Object);
    }
}
