//! Service configuration.
//!
//! Configuration is a TOML file with two tables:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [content]
//! lessons_dir = "~/courses/lessons"
//! descriptions_dir = "~/courses/modules-descriptions"
//! cache_ttl_secs = 300
//! ```
//!
//! Every field has a default, so an empty or absent file is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use kurso_core::util::paths::expand_path;
use kurso_core::{Error, Result, TtlCache};
use serde::{Deserialize, Serialize};

/// Name used for the config directory and environment variables.
pub const PROJECT_NAME: &str = "kurso";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KURSO_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KursoConfig {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Content directory and cache settings.
///
/// Unset directories fall back to the `KURSO_*_DIR` environment variables
/// and then to the relative candidate lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions_dir: Option<PathBuf>,
    pub cache_ttl_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            lessons_dir: None,
            descriptions_dir: None,
            cache_ttl_secs: TtlCache::<()>::DEFAULT_TTL.as_secs(),
        }
    }
}

impl ContentConfig {
    /// Configured lessons directory with `~` expanded.
    pub fn lessons_dir(&self) -> Option<PathBuf> {
        self.lessons_dir.as_deref().map(expand_path)
    }

    /// Configured descriptions directory with `~` expanded.
    pub fn descriptions_dir(&self) -> Option<PathBuf> {
        self.descriptions_dir.as_deref().map(expand_path)
    }

    /// Description cache lifetime.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl KursoConfig {
    /// Load configuration.
    ///
    /// An explicit path (argument, then `KURSO_CONFIG`) must exist. The
    /// default path is optional: when it is absent the defaults are used.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let explicit = config_path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

        match explicit {
            Some(path) => Self::from_file(&expand_path(Path::new(&path))),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found; using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The config file that [`load`](Self::load) would read.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        config_path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .map(|p| expand_path(Path::new(&p)))
            .or_else(Self::default_config_path)
    }

    /// `<config dir>/kurso/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
