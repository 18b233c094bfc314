//! API response type definitions.

use serde::Deserialize;

/// Public resource metadata returned by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct PublicResource {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
}

/// Embedded folder contents.
#[derive(Debug, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub items: Vec<ResourceItem>,
}

/// A single entry of a listed folder.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceItem {
    pub name: String,
}

/// Direct-download link returned by the download endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub href: String,
}
