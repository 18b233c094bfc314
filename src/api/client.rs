//! Yandex Disk public resources HTTP client.

use reqwest::{Client, Response, StatusCode};

use crate::api::types::{Link, PublicResource, ResourceItem};
use crate::config::NetworkConfig;
use crate::error::{Error, ItemError, Result};

/// Longest response excerpt included in parse errors.
const MAX_ERROR_BODY: usize = 500;

/// Client for the public (read-only) resources API.
///
/// Cheap to share by reference across concurrent workers: the underlying
/// `reqwest::Client` pools connections internally.
pub struct DiskApi {
    client: Client,
    api_base: String,
}

impl DiskApi {
    /// Create a new API client.
    pub fn new(network: &NetworkConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&network.user_agent)
            .connect_timeout(network.connect_timeout())
            .read_timeout(network.read_timeout())
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: network.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the folder listing request.
    pub fn listing_url(&self, public_key: &str, limit: u32) -> String {
        format!(
            "{}?public_key={}&limit={}",
            self.api_base,
            urlencoding::encode(public_key),
            limit
        )
    }

    /// URL of the per-item download link request.
    pub fn download_link_url(&self, public_key: &str, name: &str) -> String {
        format!(
            "{}/download?public_key={}&path=/{}",
            self.api_base,
            urlencoding::encode(public_key),
            urlencoding::encode(name)
        )
    }

    /// Make an unauthenticated GET request.
    async fn get(&self, url: &str) -> reqwest::Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// List the items of a public folder, in the order the API returns them.
    ///
    /// Any status other than 200 is reported as [`Error::Listing`].
    pub async fn list_folder(&self, public_key: &str, limit: u32) -> Result<Vec<ResourceItem>> {
        let response = self.get(&self.listing_url(public_key, limit)).await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Listing {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Listing response length: {} bytes", text.len());

        let resource: PublicResource = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse folder listing: {} - Response: {}",
                e,
                excerpt(&text)
            ))
        })?;

        Ok(resource.embedded.items)
    }

    /// Resolve the temporary direct-download URL of one folder item.
    pub async fn resolve_download_url(
        &self,
        public_key: &str,
        name: &str,
    ) -> std::result::Result<String, ItemError> {
        let response = self
            .get(&self.download_link_url(public_key, name))
            .await
            .map_err(|e| ItemError::Resolve(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ItemError::ResolveStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ItemError::Resolve(e.to_string()))?;

        let link: Link = serde_json::from_str(&text).map_err(|e| {
            ItemError::Resolve(format!(
                "malformed response: {} - Response: {}",
                e,
                excerpt(&text)
            ))
        })?;

        if link.href.is_empty() {
            return Err(ItemError::Resolve("response has an empty href".into()));
        }

        Ok(link.href)
    }

    /// Open a streamed download of a direct-download URL.
    ///
    /// Non-2xx responses are returned as [`ItemError::TransferStatus`] before
    /// any body is read.
    pub async fn download_file(&self, href: &str) -> std::result::Result<Response, ItemError> {
        let response = self
            .get(href)
            .await
            .map_err(|e| ItemError::Transfer(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ItemError::TransferStatus(response.status().as_u16()));
        }

        Ok(response)
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(MAX_ERROR_BODY).collect()
}
