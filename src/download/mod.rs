//! Download module for the resolve-then-fetch pipeline.
//!
//! This module provides:
//! - Item records and the folder target
//! - Folder listing
//! - Concurrent download link resolution
//! - Concurrent file transfer
//! - Progress events and the run summary

pub mod item;
pub mod listing;
pub mod pipeline;
pub mod pool;
pub mod progress;
pub mod resolver;
pub mod result;
pub mod transfer;

pub use item::{FolderTarget, ItemRecord, ItemState};
pub use listing::list_items;
pub use pipeline::{Downloader, PipelineSettings};
pub use progress::{NoProgress, Phase, ProgressSink};
pub use resolver::resolve_all;
pub use result::{FailedItem, RunResult};
pub use transfer::{transfer_all, TransferOutcome, CHUNK_SIZE};
