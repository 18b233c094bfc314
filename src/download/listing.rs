//! Folder listing.

use crate::api::DiskApi;
use crate::download::item::{FolderTarget, ItemRecord};
use crate::error::Result;

/// List the folder and create one record per entry, indexed by position.
///
/// Fails with [`crate::Error::Listing`] on any non-200 response.
pub async fn list_items(api: &DiskApi, target: &FolderTarget) -> Result<Vec<ItemRecord>> {
    tracing::info!(
        "Listing folder {} (limit {})",
        target.public_key,
        target.item_limit
    );

    let entries = api
        .list_folder(&target.public_key, target.item_limit)
        .await?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ItemRecord::new(index, entry.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::download::item::ItemState;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_items_assigns_positions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": {
                    "items": [{"name": "z.bin"}, {"name": "a.bin"}, {"name": "m.bin"}]
                }
            })))
            .mount(&server)
            .await;

        let network = NetworkConfig {
            api_base: format!("{}/resources", server.uri()),
            ..Default::default()
        };
        let api = DiskApi::new(&network).unwrap();
        let target = FolderTarget::new("https://yadi.sk/d/abc", 3);

        let items = list_items(&api, &target).await.unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["z.bin", "a.bin", "m.bin"]);
        for (position, item) in items.iter().enumerate() {
            assert_eq!(item.index, position);
            assert_eq!(item.state, ItemState::Listed);
        }
    }
}
