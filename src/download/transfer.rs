//! File transfer to the destination directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::api::DiskApi;
use crate::download::item::{ItemRecord, ItemState};
use crate::download::pool::run_bounded;
use crate::download::progress::{Phase, ProgressSink};
use crate::error::{Error, ItemError};
use crate::fs::destination_path;

/// Size of the buffered chunks written to disk (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Final result of transferring one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Listing position of the item.
    pub index: usize,
    pub bytes_written: u64,
    pub error: Option<ItemError>,
}

impl TransferOutcome {
    pub fn succeeded(index: usize, bytes_written: u64) -> Self {
        Self {
            index,
            bytes_written,
            error: None,
        }
    }

    pub fn failed(index: usize, error: ItemError) -> Self {
        Self {
            index,
            bytes_written: 0,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Status of the failed download request, if that is why it failed.
    pub fn http_status(&self) -> Option<u16> {
        match &self.error {
            Some(ItemError::TransferStatus(status)) => Some(*status),
            _ => None,
        }
    }
}

/// Download every resolved item into `destination_dir`, at most `workers` at
/// a time.
///
/// The returned outcomes are index-aligned with `items`. Items whose link was
/// not resolved fail with [`ItemError::UpstreamUrlFailure`] without any
/// request being made, as do items whose destination is unusable or already
/// taken by an earlier item.
pub async fn transfer_all(
    api: &DiskApi,
    items: &[ItemRecord],
    destination_dir: &Path,
    workers: usize,
    progress: &dyn ProgressSink,
) -> Vec<TransferOutcome> {
    let total = items.len();
    let targets = plan_destinations(items, destination_dir);
    let mut outcomes: Vec<Option<TransferOutcome>> = vec![None; total];
    let mut completed = 0;

    progress.on_phase_start(Phase::Transfer, total);

    run_bounded(
        total,
        workers,
        |index| transfer_item(api, index, &targets[index]),
        |index, outcome| {
            match &outcome.error {
                None => tracing::debug!(
                    "Downloaded: {} ({} bytes)",
                    items[index].name,
                    outcome.bytes_written
                ),
                Some(e) => tracing::warn!("Failed to download {}: {}", items[index].name, e),
            }
            outcomes[index] = Some(outcome);

            completed += 1;
            progress.on_progress(Phase::Transfer, completed, total);
        },
    )
    .await;

    progress.on_phase_end(Phase::Transfer);

    // run_bounded visits every index exactly once
    let outcomes: Vec<TransferOutcome> = outcomes.into_iter().flatten().collect();
    debug_assert_eq!(outcomes.len(), total);
    outcomes
}

/// Where each item is fetched from and written to.
///
/// Destinations are claimed in listing order, so every worker writes a path
/// no other worker touches.
fn plan_destinations(
    items: &[ItemRecord],
    destination_dir: &Path,
) -> Vec<Result<(String, PathBuf), ItemError>> {
    let mut claimed = HashSet::new();

    items
        .iter()
        .map(|item| {
            let href = match (&item.state, &item.resolved_url) {
                (ItemState::UrlResolved, Some(href)) => href.clone(),
                _ => return Err(ItemError::UpstreamUrlFailure),
            };

            let output_path =
                destination_path(destination_dir, &item.name).map_err(|e| match e {
                    Error::InvalidFilename(message) => ItemError::InvalidFilename(message),
                    other => ItemError::Io(other.to_string()),
                })?;

            if !claimed.insert(output_path.clone()) {
                return Err(ItemError::DuplicateDestination(
                    output_path.display().to_string(),
                ));
            }

            Ok((href, output_path))
        })
        .collect()
}

async fn transfer_item(
    api: &DiskApi,
    index: usize,
    target: &Result<(String, PathBuf), ItemError>,
) -> TransferOutcome {
    let result = match target {
        Ok((href, output_path)) => fetch_item(api, href, output_path).await,
        Err(e) => Err(e.clone()),
    };

    match result {
        Ok(bytes) => TransferOutcome::succeeded(index, bytes),
        Err(e) => TransferOutcome::failed(index, e),
    }
}

async fn fetch_item(api: &DiskApi, href: &str, output_path: &Path) -> Result<u64, ItemError> {
    let response = api.download_file(href).await?;
    let file = File::create(output_path).await?;

    match write_body(response, file).await {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            remove_partial(output_path).await;
            Err(e)
        }
    }
}

/// Stream the response body to `file` through a fixed-size buffer.
async fn write_body(response: Response, file: File) -> Result<u64, ItemError> {
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ItemError::Transfer(format!("Stream error: {}", e)))?;
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    writer.flush().await?;
    Ok(written)
}

async fn remove_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::debug!("Could not remove partial file {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::download::progress::NoProgress;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_api() -> DiskApi {
        DiskApi::new(&NetworkConfig::default()).unwrap()
    }

    fn resolved(index: usize, name: &str, href: String) -> ItemRecord {
        let mut item = ItemRecord::new(index, name);
        item.record_resolution(Ok(href));
        item
    }

    #[tokio::test]
    async fn test_unresolved_item_is_skipped_without_request() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let mut item = ItemRecord::new(0, "a.txt");
        item.record_resolution(Err(ItemError::ResolveStatus(404)));

        let outcomes = transfer_all(&make_api(), &[item], dir.path(), 4, &NoProgress).await;

        assert_eq!(
            outcomes,
            [TransferOutcome::failed(0, ItemError::UpstreamUrlFailure)]
        );
        assert!(server.received_requests().await.unwrap().is_empty());
        assert!(!dir.path().join("a.txt").exists());
    }

    #[tokio::test]
    async fn test_body_larger_than_chunk_is_written_intact() {
        let server = MockServer::start().await;
        let body: Vec<u8> = (0..(CHUNK_SIZE * 3 + 17)).map(|i| (i % 251) as u8).collect();
        Mock::given(method("GET"))
            .and(path("/big"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let items = [resolved(0, "big.bin", format!("{}/big", server.uri()))];
        let outcomes = transfer_all(&make_api(), &items, dir.path(), 1, &NoProgress).await;

        assert_eq!(outcomes, [TransferOutcome::succeeded(0, body.len() as u64)]);
        assert_eq!(std::fs::read(dir.path().join("big.bin")).unwrap(), body);
    }

    #[tokio::test]
    async fn test_invalid_filename_fails_before_request() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let items = [resolved(0, "../escape.txt", format!("{}/x", server.uri()))];

        let outcomes = transfer_all(&make_api(), &items, dir.path(), 1, &NoProgress).await;

        assert!(matches!(
            outcomes[0].error,
            Some(ItemError::InvalidFilename(_))
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_names_with_dots_and_symbols_are_written_as_listed() {
        let server = MockServer::start().await;
        for (route, body) in [("/dots", "three dots"), ("/double", "double dot"), ("/colon", "colon")] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .expect(1)
                .mount(&server)
                .await;
        }

        let dir = tempfile::tempdir().unwrap();
        let items = [
            resolved(0, "notes...txt", format!("{}/dots", server.uri())),
            resolved(1, "v1..2.tar", format!("{}/double", server.uri())),
            resolved(2, "a:b.txt", format!("{}/colon", server.uri())),
        ];
        let outcomes = transfer_all(&make_api(), &items, dir.path(), 3, &NoProgress).await;

        assert!(outcomes.iter().all(TransferOutcome::is_success));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("notes...txt")).unwrap(),
            "three dots"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("v1..2.tar")).unwrap(),
            "double dot"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a:b.txt")).unwrap(),
            "colon"
        );
    }

    #[tokio::test]
    async fn test_second_item_with_same_destination_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/first"))
            .respond_with(ResponseTemplate::new(200).set_body_string("first"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/second"))
            .respond_with(ResponseTemplate::new(200).set_body_string("second"))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let items = [
            resolved(0, "same.txt", format!("{}/first", server.uri())),
            resolved(1, "same.txt", format!("{}/second", server.uri())),
        ];
        let outcomes = transfer_all(&make_api(), &items, dir.path(), 2, &NoProgress).await;

        assert!(outcomes[0].is_success());
        assert!(matches!(
            outcomes[1].error,
            Some(ItemError::DuplicateDestination(_))
        ));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("same.txt")).unwrap(),
            "first"
        );
    }

    #[tokio::test]
    async fn test_unwritable_destination_is_per_item_io_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"data"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let items = [resolved(0, "a.txt", format!("{}/file", server.uri()))];

        let outcomes = transfer_all(&make_api(), &items, &missing, 1, &NoProgress).await;

        assert!(matches!(outcomes[0].error, Some(ItemError::Io(_))));
        assert_eq!(outcomes[0].bytes_written, 0);
    }

    #[test]
    fn test_outcome_http_status() {
        assert_eq!(
            TransferOutcome::failed(1, ItemError::TransferStatus(403)).http_status(),
            Some(403)
        );
        assert_eq!(
            TransferOutcome::failed(1, ItemError::UpstreamUrlFailure).http_status(),
            None
        );
        assert!(TransferOutcome::succeeded(1, 0).is_success());
    }
}
