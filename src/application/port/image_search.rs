// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! This module defines the [`ImageSearch`] trait implemented by search
//! providers (see `infrastructure::pixabay`) and by test doubles.
//!
//! # Design Notes
//!
//! - One call performs exactly one request; there is no retry
//! - "No results" is a successful [`SearchPage`] with `total == 0`; every
//!   failure is a [`SearchError`]
//! - The returned future is `'static` so the caller can hand it to an Iced
//!   `Task` without borrowing the provider

use crate::domain::search::{Page, PageSize, Query, SearchPage};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// SearchRequest
// =============================================================================

/// Arguments of a single search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Query,
    pub page: Page,
    pub page_size: PageSize,
}

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur while fetching a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No API key was configured for the provider.
    #[error("no API key configured")]
    MissingApiKey,

    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SearchError::MissingApiKey => "error-search-missing-key",
            SearchError::Transport(_) => "error-search-network",
            SearchError::Status(429) => "error-search-rate-limited",
            SearchError::Status(_) => "error-search-status",
            SearchError::Decode(_) => "error-search-decode",
        }
    }
}

// =============================================================================
// ImageSearch
// =============================================================================

/// A remote image search provider.
pub trait ImageSearch: Send + Sync {
    /// Fetches one page of results for `request`.
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, Result<SearchPage, SearchError>>;
}
