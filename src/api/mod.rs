//! Yandex Disk API module.
//!
//! This module provides:
//! - HTTP client for the public resources REST API
//! - API response types

pub mod client;
pub mod types;

pub use client::DiskApi;
pub use types::*;
