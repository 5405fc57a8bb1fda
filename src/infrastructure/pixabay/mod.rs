// SPDX-License-Identifier: MPL-2.0
//! Pixabay adapter implementing the [`ImageSearch`] port.
//!
//! One [`ImageSearch::search`] call sends exactly one
//! `GET {endpoint}?key=..&q=..&page=..&per_page=..` request. Failures are
//! classified into [`SearchError`] variants; an empty `hits` array with a
//! zero total is a successful, empty page.
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch

mod response;

pub use response::{PixabayHit, PixabayResponse};

use crate::application::port::{ImageSearch, SearchError, SearchRequest};
use crate::domain::search::SearchPage;
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::time::Duration;

/// Public search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";

/// Connection settings for [`PixabayClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixabaySettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub safesearch: bool,
}

impl Default for PixabaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(15),
            safesearch: true,
        }
    }
}

/// HTTP client for the Pixabay image search API.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: reqwest::Client,
    settings: PixabaySettings,
}

impl PixabayClient {
    /// Builds a client. Fails only if the TLS backend cannot be initialized.
    pub fn new(settings: PixabaySettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, settings })
    }

    /// Returns the settings the client was built with.
    #[must_use]
    pub fn settings(&self) -> &PixabaySettings {
        &self.settings
    }

    /// Builds the HTTP request for `request` without sending it.
    pub fn build_request(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<reqwest::Request, SearchError> {
        let key = self
            .settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SearchError::MissingApiKey)?;

        let params = [
            ("key", key.to_string()),
            ("q", request.query.as_str().to_string()),
            ("image_type", "photo".to_string()),
            ("orientation", "horizontal".to_string()),
            ("safesearch", self.settings.safesearch.to_string()),
            ("page", request.page.get().to_string()),
            ("per_page", request.page_size.get().to_string()),
        ];

        self.http
            .get(&self.settings.endpoint)
            .query(&params)
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))
    }
}

impl ImageSearch for PixabayClient {
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, std::result::Result<SearchPage, SearchError>> {
        let http = self.http.clone();
        let built = self.build_request(&request);

        Box::pin(async move {
            let http_request = built?;
            let response = http
                .execute(http_request)
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Status(status.as_u16()));
            }

            let body: PixabayResponse = response.json().await.map_err(|e| {
                if e.is_decode() {
                    SearchError::Decode(e.to_string())
                } else {
                    SearchError::Transport(e.to_string())
                }
            })?;

            Ok(body.into_search_page())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{Page, PageSize, Query};
    use std::collections::HashMap;

    fn client(api_key: Option<&str>) -> PixabayClient {
        PixabayClient::new(PixabaySettings {
            api_key: api_key.map(str::to_string),
            ..PixabaySettings::default()
        })
        .expect("client should build")
    }

    fn request(text: &str, page: u32) -> SearchRequest {
        SearchRequest {
            query: Query::parse(text).unwrap(),
            page: Page::new(page).unwrap(),
            page_size: PageSize::DEFAULT,
        }
    }

    #[test]
    fn request_carries_query_page_and_size() {
        let built = client(Some("secret"))
            .build_request(&request("yellow flowers", 3))
            .unwrap();

        assert_eq!(built.method(), reqwest::Method::GET);
        assert!(built.url().as_str().starts_with(DEFAULT_ENDPOINT));

        let params: HashMap<String, String> = built.url().query_pairs().into_owned().collect();
        assert_eq!(params["key"], "secret");
        assert_eq!(params["q"], "yellow flowers");
        assert_eq!(params["page"], "3");
        assert_eq!(params["per_page"], "12");
        assert_eq!(params["image_type"], "photo");
        assert_eq!(params["orientation"], "horizontal");
        assert_eq!(params["safesearch"], "true");
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let err = client(None).build_request(&request("cats", 1)).unwrap_err();
        assert_eq!(err, SearchError::MissingApiKey);

        let err = client(Some("  ")).build_request(&request("cats", 1)).unwrap_err();
        assert_eq!(err, SearchError::MissingApiKey);
    }

    #[tokio::test]
    async fn search_without_key_resolves_to_error() {
        let outcome = client(None).search(request("cats", 1)).await;
        assert_eq!(outcome, Err(SearchError::MissingApiKey));
    }

    #[test]
    fn safesearch_can_be_disabled() {
        let client = PixabayClient::new(PixabaySettings {
            api_key: Some("k".into()),
            safesearch: false,
            ..PixabaySettings::default()
        })
        .unwrap();
        let built = client.build_request(&request("cats", 1)).unwrap();
        assert!(built.url().query().unwrap().contains("safesearch=false"));
    }
}
