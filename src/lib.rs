//! yadisk-downloader - bulk download of public Yandex Disk folders.
//!
//! This library lists a public folder, resolves a short-lived direct-download
//! link for every file and streams all files to a local directory.
//!
//! # Features
//!
//! - Bounded concurrent link resolution and file transfer
//! - Per-file failure isolation with a final summary
//! - Progress events for an external renderer
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use yadisk_downloader::{Config, DiskApi, Downloader, FolderTarget, PipelineSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = DiskApi::new(&config.network)?;
//!     let target = FolderTarget::from_config(&config)?;
//!
//!     let downloader = Downloader::new(api, PipelineSettings::from(&config.options));
//!     let result = downloader.run(&target, &config.destination_folder()).await?;
//!     println!("{} of {} downloaded", result.succeeded, result.total);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::DiskApi;
pub use config::Config;
pub use download::{
    Downloader, FolderTarget, ItemRecord, ItemState, NoProgress, Phase, PipelineSettings,
    ProgressSink, RunResult, TransferOutcome,
};
pub use error::{Error, ItemError, Result};
