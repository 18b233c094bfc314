//! Configuration module for the yadisk-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation
//! - Deriving the folder public key from its URL

pub mod loader;
pub mod validation;

pub use loader::{Config, NetworkConfig, OptionsConfig, TargetConfig};
pub use validation::{folder_id_from_url, validate_config};
