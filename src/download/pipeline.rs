//! Listing, link resolution and transfer, in sequence.

use std::path::Path;
use std::sync::Arc;

use crate::api::DiskApi;
use crate::config::OptionsConfig;
use crate::download::item::FolderTarget;
use crate::download::listing::list_items;
use crate::download::progress::{NoProgress, ProgressSink};
use crate::download::resolver::resolve_all;
use crate::download::result::RunResult;
use crate::download::transfer::transfer_all;
use crate::error::Result;

/// Worker pool widths of the two concurrent phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub resolve_workers: usize,
    pub transfer_workers: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        OptionsConfig::default().into()
    }
}

impl From<&OptionsConfig> for PipelineSettings {
    fn from(options: &OptionsConfig) -> Self {
        Self {
            resolve_workers: options.resolve_workers,
            transfer_workers: options.transfer_workers,
        }
    }
}

impl From<OptionsConfig> for PipelineSettings {
    fn from(options: OptionsConfig) -> Self {
        (&options).into()
    }
}

/// Downloads a whole public folder.
pub struct Downloader {
    api: DiskApi,
    settings: PipelineSettings,
    progress: Arc<dyn ProgressSink>,
}

impl Downloader {
    pub fn new(api: DiskApi, settings: PipelineSettings) -> Self {
        Self {
            api,
            settings,
            progress: Arc::new(NoProgress),
        }
    }

    /// Send progress events to `progress`.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Download every item of `target` into `destination_dir`.
    ///
    /// Only a failed listing is returned as an error. Per-item failures are
    /// reported in the [`RunResult`].
    pub async fn run(&self, target: &FolderTarget, destination_dir: &Path) -> Result<RunResult> {
        let items = list_items(&self.api, target).await?;
        tracing::info!("Found {} item(s)", items.len());

        if items.is_empty() {
            return Ok(RunResult::default());
        }

        let items = resolve_all(
            &self.api,
            target,
            items,
            self.settings.resolve_workers,
            self.progress.as_ref(),
        )
        .await;

        tracing::info!("Download has started");
        let outcomes = transfer_all(
            &self.api,
            &items,
            destination_dir,
            self.settings.transfer_workers,
            self.progress.as_ref(),
        )
        .await;
        tracing::info!("Download has finished");

        Ok(RunResult::new(items, &outcomes))
    }
}
