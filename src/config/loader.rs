//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public resources endpoint of the Yandex Disk REST API.
pub const DEFAULT_API_BASE: &str = "https://cloud-api.yandex.net/v1/disk/public/resources";

/// Short-link prefix the public key of a shared folder is built from.
pub const DEFAULT_PUBLIC_LINK_BASE: &str = "https://yadi.sk/d";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Which public folder to download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Public URL of the shared folder.
    #[serde(default)]
    pub target_url: String,

    /// Maximum number of items to list.
    #[serde(default = "default_number_of_files")]
    pub number_of_files: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            target_url: String::new(),
            number_of_files: default_number_of_files(),
        }
    }
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory files are written to. Must already exist.
    #[serde(default)]
    pub destination_folder: Option<PathBuf>,

    /// Concurrent download link requests.
    #[serde(default = "default_resolve_workers")]
    pub resolve_workers: usize,

    /// Concurrent file transfers.
    #[serde(default = "default_transfer_workers")]
    pub transfer_workers: usize,

    /// Whether to render progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            destination_folder: None,
            resolve_workers: default_resolve_workers(),
            transfer_workers: default_transfer_workers(),
            show_progress: true,
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the public resources endpoint.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Prefix used to build the folder public key.
    #[serde(default = "default_public_link_base")]
    pub public_link_base: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Maximum time between two reads of a response body.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            public_link_base: default_public_link_base(),
            user_agent: default_user_agent(),
            connect_timeout_seconds: default_connect_timeout(),
            read_timeout_seconds: default_read_timeout(),
        }
    }
}

impl NetworkConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_seconds)
    }
}

fn default_number_of_files() -> u32 {
    100
}

fn default_resolve_workers() -> usize {
    16
}

fn default_transfer_workers() -> usize {
    8
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_public_link_base() -> String {
    DEFAULT_PUBLIC_LINK_BASE.to_string()
}

fn default_user_agent() -> String {
    concat!("yadisk-downloader/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective destination directory.
    pub fn destination_folder(&self) -> PathBuf {
        self.options
            .destination_folder
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
