// SPDX-License-Identifier: MPL-2.0
//! Downloads image bytes for thumbnails and the preview overlay.
//!
//! Images are fetched only when the gallery displays them. A semaphore caps
//! the number of concurrent downloads so a freshly appended page does not
//! open a dozen connections at once.

use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Maximum number of image downloads in flight.
pub const MAX_CONCURRENT_DOWNLOADS: usize = 6;

/// Shared image downloader. Cloning is cheap and shares the permit pool.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    http: reqwest::Client,
    permits: Arc<Semaphore>,
}

impl ImageFetcher {
    /// Builds a downloader with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            permits: Arc::new(Semaphore::new(MAX_CONCURRENT_DOWNLOADS)),
        })
    }

    /// Downloads `url` and returns the raw (still encoded) image bytes.
    pub async fn fetch(self, url: String) -> Result<Vec<u8>> {
        let _permit = self
            .permits
            .acquire_owned()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http(format!("HTTP status: {}", response.status())));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Number of download slots currently free.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.permits.available_permits()
    }
}
