//! Direct-download URL resolution.

use crate::api::DiskApi;
use crate::download::item::{FolderTarget, ItemRecord};
use crate::download::pool::run_bounded;
use crate::download::progress::{Phase, ProgressSink};

/// Resolve the download link of every item, at most `workers` at a time.
///
/// Returns the same records in the same order, each either `UrlResolved` or
/// `UrlFailed`. One item failing never stops the others.
pub async fn resolve_all(
    api: &DiskApi,
    target: &FolderTarget,
    mut items: Vec<ItemRecord>,
    workers: usize,
    progress: &dyn ProgressSink,
) -> Vec<ItemRecord> {
    let total = items.len();
    let names: Vec<String> = items.iter().map(|item| item.name.clone()).collect();
    let mut completed = 0;

    tracing::info!("Resolving {} download link(s)", total);
    progress.on_phase_start(Phase::Resolve, total);

    run_bounded(
        total,
        workers,
        |index| api.resolve_download_url(&target.public_key, &names[index]),
        |index, result| {
            if let Err(e) = &result {
                tracing::warn!("Could not resolve {}: {}", names[index], e);
            }
            items[index].record_resolution(result);

            completed += 1;
            progress.on_progress(Phase::Resolve, completed, total);
        },
    )
    .await;

    progress.on_phase_end(Phase::Resolve);
    items
}
