//! Folder target and per-item records.

use crate::config::{folder_id_from_url, Config};
use crate::download::transfer::TransferOutcome;
use crate::error::{ItemError, Result};

/// The public folder a run downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTarget {
    /// Public key sent with every API request.
    pub public_key: String,

    /// Maximum number of items to list.
    pub item_limit: u32,
}

impl FolderTarget {
    pub fn new(public_key: impl Into<String>, item_limit: u32) -> Self {
        Self {
            public_key: public_key.into(),
            item_limit,
        }
    }

    /// Build the target from configuration.
    ///
    /// The public key is `{public_link_base}/{folder_id}`, where the folder id
    /// is the last path segment of the configured URL.
    pub fn from_config(config: &Config) -> Result<Self> {
        let folder_id = folder_id_from_url(&config.target.target_url)?;
        let public_key = format!(
            "{}/{}",
            config.network.public_link_base.trim_end_matches('/'),
            folder_id
        );

        Ok(Self::new(public_key, config.target.number_of_files))
    }
}

/// Lifecycle of a listed item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Listed,
    UrlResolved,
    UrlFailed(ItemError),
    Transferred,
    TransferFailed(ItemError),
}

/// One listed file, carrying its own name, link and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Position in the listing.
    pub index: usize,

    /// Provider-assigned name, also the destination filename.
    pub name: String,

    /// Direct-download URL, once resolved.
    pub resolved_url: Option<String>,

    pub state: ItemState,
}

impl ItemRecord {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            resolved_url: None,
            state: ItemState::Listed,
        }
    }

    /// Store the result of resolving this item's download link.
    pub fn record_resolution(&mut self, result: std::result::Result<String, ItemError>) {
        match result {
            Ok(href) => {
                self.resolved_url = Some(href);
                self.state = ItemState::UrlResolved;
            }
            Err(e) => {
                self.resolved_url = None;
                self.state = ItemState::UrlFailed(e);
            }
        }
    }

    /// Store the final transfer outcome.
    ///
    /// An item skipped because its link never resolved keeps the resolution
    /// error as its failure reason.
    pub fn record_outcome(&mut self, outcome: &TransferOutcome) {
        if matches!(self.state, ItemState::UrlFailed(_))
            && outcome.error == Some(ItemError::UpstreamUrlFailure)
        {
            return;
        }

        self.state = match &outcome.error {
            None => ItemState::Transferred,
            Some(e) => ItemState::TransferFailed(e.clone()),
        };
    }

    /// Failure recorded for this item, if any.
    pub fn failure(&self) -> Option<&ItemError> {
        match &self.state {
            ItemState::UrlFailed(e) | ItemState::TransferFailed(e) => Some(e),
            _ => None,
        }
    }
}
