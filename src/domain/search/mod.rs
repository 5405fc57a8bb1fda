// SPDX-License-Identifier: MPL-2.0
//! Image search domain types.
//!
//! Value objects shared by the search state machine, the image search port
//! and the presentation layer. All of them are plain data with `std` only.
//!
//! - [`Query`]: validated, non-blank search text
//! - [`Page`]: 1-based page index
//! - [`PageSize`]: number of results requested per page
//! - [`ImageResult`]: one search hit
//! - [`SearchPage`]: one page of results with the reported total

mod types;

pub use types::{ImageResult, Page, PageSize, Query, SearchPage};
