//! REST Store Client
//!
//! Thin client for the hosted `items` table, speaking the PostgREST
//! dialect the service exposes. Listing uses offset/limit with an exact
//! count; single-record reads request one JSON object so a missing row
//! surfaces as a distinct status.

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{ItemPage, ItemStore, StoreError, StoreResult};
use crate::domain::{Item, ValidFields};

/// Accept header value asking for exactly one JSON object
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Connection settings for the hosted store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// REST root, e.g. `https://example.invalid/rest/v1`
    pub base_url: String,
    /// API key, sent as `apikey` and bearer authorization when present
    pub api_key: Option<String>,
}

/// Error body shape the service returns
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// REST-backed `ItemStore`
pub struct RestStore {
    http: Client,
    items_url: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: Client::new(),
            items_url: format!("{}/items", config.base_url.trim_end_matches('/')),
            api_key: config.api_key,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    /// Map a non-success response to a store error, keeping the service's
    /// message when it sends one
    async fn rejection(response: Response) -> StoreError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("request failed with status {}", status),
        };
        log::warn!("store rejected request ({}): {}", status, message);
        StoreError::Rejected(message)
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

/// Total row count from a `Content-Range` header such as `0-11/54`
fn content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[async_trait(?Send)]
impl ItemStore for RestStore {
    async fn list(&self, page: u32, page_size: u32) -> StoreResult<ItemPage> {
        let offset = (page.max(1) as u64 - 1) * page_size as u64;
        let response = self
            .authorized(self.http.get(&self.items_url))
            .query(&[("select", "*"), ("order", "created_at.desc,id.desc")])
            .query(&[
                ("offset", offset.to_string()),
                ("limit", page_size.to_string()),
            ])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let total = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(content_range_total);

        let items: Vec<Item> = response.json().await.map_err(transport)?;
        let total_count = total.unwrap_or(items.len() as u64);
        Ok(ItemPage { items, total_count })
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Item> {
        let filter = format!("eq.{}", id);
        let response = self
            .authorized(self.http.get(&self.items_url))
            .query(&[("select", "*"), ("id", filter.as_str())])
            .header(header::ACCEPT, SINGLE_OBJECT)
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::NOT_ACCEPTABLE | StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            status if status.is_success() => response.json().await.map_err(transport),
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn create(&self, fields: &ValidFields) -> StoreResult<Item> {
        let response = self
            .authorized(self.http.post(&self.items_url))
            .header("Prefer", "return=representation")
            .header(header::ACCEPT, SINGLE_OBJECT)
            .json(fields)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn update(&self, id: i64, fields: &ValidFields) -> StoreResult<Item> {
        let filter = format!("eq.{}", id);
        let response = self
            .authorized(self.http.patch(&self.items_url))
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=representation")
            .header(header::ACCEPT, SINGLE_OBJECT)
            .json(fields)
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            // Zero rows matched the filter
            StatusCode::NOT_ACCEPTABLE => Err(StoreError::NotFound),
            status if status.is_success() => response.json().await.map_err(transport),
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let filter = format!("eq.{}", id);
        let response = self
            .authorized(self.http.delete(&self.items_url))
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate, Draft};

    #[test]
    fn item_row_deserializes() {
        let row = r#"{
            "id": 7,
            "created_at": "2025-11-03T12:30:00Z",
            "name": "Widget",
            "description": "A small widget",
            "owner_id": null
        }"#;

        let item: Item = serde_json::from_str(row).expect("row should parse");

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Widget");
        assert!(item.owner_id.is_none());
    }

    #[test]
    fn write_payload_carries_exactly_the_two_fields() {
        let fields = validate(&Draft {
            name: "Widget".to_string(),
            description: "A small widget".to_string(),
        })
        .expect("fields should validate");

        let payload = serde_json::to_value(&fields).expect("payload should serialize");

        assert_eq!(
            payload,
            serde_json::json!({ "name": "Widget", "description": "A small widget" })
        );
    }

    #[test]
    fn content_range_with_total() {
        assert_eq!(content_range_total("0-11/54"), Some(54));
    }

    #[test]
    fn content_range_empty_table() {
        assert_eq!(content_range_total("*/0"), Some(0));
    }

    #[test]
    fn content_range_unknown_total() {
        assert_eq!(content_range_total("0-11/*"), None);
        assert_eq!(content_range_total("garbage"), None);
    }

    #[test]
    fn items_url_strips_trailing_slash() {
        let store = RestStore::new(StoreConfig {
            base_url: "https://example.invalid/rest/v1/".to_string(),
            api_key: None,
        });
        assert_eq!(store.items_url, "https://example.invalid/rest/v1/items");
    }
}
