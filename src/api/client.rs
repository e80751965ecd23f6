//! Board REST API HTTP client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use reqwest::{header, Client, Response};
use url::Url;

use crate::api::pacing::{pacer_for, Pacer};
use crate::api::types::*;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::resource::{HeadInfo, Probe, ResourceFetcher, BODY_PREFIX_CHARS};

/// Board API client sharing one HTTP session for listing and resource requests.
pub struct BoardApi {
    client: Client,
    api_root: Url,
    page_size: u32,
    page_pacer: Box<dyn Pacer>,
    listing_started: AtomicBool,
    request_timeout: Duration,
    listing_timeout: Duration,
}

/// Where the listing loop is between pages.
enum PageCursor {
    First,
    Next(String),
    Done,
}

impl BoardApi {
    /// Create a new API client authenticated with a bearer token.
    pub fn new(token: &str, config: &ApiConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("Access token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        // Build HTTP client
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_root: Url::parse(&config.api_root)?,
            page_size: config.page_size,
            page_pacer: pacer_for(config.page_delay()),
            listing_started: AtomicBool::new(false),
            request_timeout: config.request_timeout(),
            listing_timeout: config.listing_timeout(),
        })
    }

    /// Replace the pacer used between listing pages.
    pub fn with_page_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.page_pacer = pacer;
        self
    }

    /// Build the listing URL for one page of items.
    fn items_url(&self, board_id: &str, item_type: ItemType, cursor: Option<&str>) -> Result<Url> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Invalid API root: {}", self.api_root)))?
            .pop_if_empty()
            .extend(["boards", board_id, "items"]);

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("type", item_type.as_str())
                .append_pair("limit", &self.page_size.to_string());
            if let Some(cursor) = cursor {
                query.append_pair("cursor", cursor);
            }
        }

        Ok(url)
    }

    /// Fetch a single page of items of one type.
    ///
    /// Every listing request after the client's first waits on the page
    /// pacer, across item types as well as across pages.
    pub async fn list_items(
        &self,
        board_id: &str,
        item_type: ItemType,
        cursor: Option<&str>,
    ) -> Result<ItemsPage> {
        let url = self.items_url(board_id, item_type, cursor)?;

        if self.listing_started.swap(true, Ordering::Relaxed) {
            self.page_pacer.pause().await;
        }

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .timeout(self.listing_timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let page: ItemsPage = serde_json::from_str(&text).map_err(|e| Error::Transport {
            url: url.to_string(),
            status: status.as_u16(),
            body: format!(
                "unparseable listing ({}): {}",
                e,
                text.chars().take(500).collect::<String>()
            ),
        })?;

        Ok(page)
    }

    /// Lazily yield every item of `item_type` on the board, following cursors.
    ///
    /// Pages are requested only as the stream is polled. The first error ends
    /// the stream.
    pub fn items<'a>(
        &'a self,
        board_id: &'a str,
        item_type: ItemType,
    ) -> impl Stream<Item = Result<Item>> + 'a {
        stream::try_unfold(PageCursor::First, move |state| async move {
            let cursor = match state {
                PageCursor::Done => return Ok::<_, Error>(None),
                PageCursor::First => None,
                PageCursor::Next(cursor) => Some(cursor),
            };

            let page = self
                .list_items(board_id, item_type, cursor.as_deref())
                .await?;

            let next = match page.next_cursor() {
                Some(cursor) => PageCursor::Next(cursor.to_string()),
                None => PageCursor::Done,
            };

            let items = stream::iter(page.data.into_iter().map(Ok::<Item, Error>));
            Ok::<_, Error>(Some((items, next)))
        })
        .try_flatten()
    }

    /// Authenticated GET following redirects, bounded by the request timeout.
    async fn get_resource(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl ResourceFetcher for BoardApi {
    async fn probe(&self, url: &str) -> Result<Probe> {
        let response = self.get_resource(url).await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();

        let text = response.text().await?;
        let body_prefix = text.chars().take(BODY_PREFIX_CHARS).collect();

        Ok(Probe {
            status,
            content_type,
            body_prefix,
        })
    }

    async fn head(&self, url: &str) -> Result<HeadInfo> {
        tracing::debug!("HEAD {}", url);
        let response = self
            .client
            .head(url)
            .timeout(self.request_timeout)
            .send()
            .await?;

        let content_disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(HeadInfo {
            status: response.status().as_u16(),
            content_disposition,
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get_resource(url).await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(root: &str) -> BoardApi {
        let config = ApiConfig {
            api_root: root.to_string(),
            ..ApiConfig::default()
        };
        BoardApi::new("token", &config).unwrap()
    }

    #[test]
    fn test_items_url_first_page() {
        let url = api("https://api.miro.com/v2")
            .items_url("uXjVabc=", ItemType::Image, None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.miro.com/v2/boards/uXjVabc=/items?type=image&limit=50"
        );
    }

    #[test]
    fn test_items_url_keeps_filters_with_cursor() {
        let url = api("https://api.miro.com/v2/")
            .items_url("b1", ItemType::StickyNote, Some("abc=="))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.miro.com/v2/boards/b1/items?type=sticky_note&limit=50&cursor=abc%3D%3D"
        );
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = BoardApi::new("bad\ntoken", &ApiConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
