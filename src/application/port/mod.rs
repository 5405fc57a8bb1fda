// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the search state machine remains
//! independent of the HTTP stack.
//!
//! # Available Ports
//!
//! - [`image_search`]: Paginated image search
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::{ImageSearch, SearchRequest};
//! use iced_gallery::domain::search::{Page, PageSize, Query};
//!
//! async fn first_page(search: &dyn ImageSearch, text: &str) {
//!     let request = SearchRequest {
//!         query: Query::parse(text).unwrap(),
//!         page: Page::FIRST,
//!         page_size: PageSize::DEFAULT,
//!     };
//!     let _page = search.search(request).await;
//! }
//! ```

pub mod image_search;

pub use image_search::{ImageSearch, SearchError, SearchRequest};
