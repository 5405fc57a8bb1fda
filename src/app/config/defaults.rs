// SPDX-License-Identifier: MPL-2.0
//! Defaults and bounds for `settings.toml` values.

use crate::domain::search::PageSize;

// Api

/// Seconds before a search or image download gives up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the Pixabay API key.
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";

// Grid

pub const DEFAULT_COLUMNS: u32 = 4;
pub const MIN_COLUMNS: u32 = 2;
pub const MAX_COLUMNS: u32 = 8;

// Cache

/// Most results the image service lets one query page through.
pub const MAX_REACHABLE_RESULTS: usize = 500;

/// Number of decoded thumbnails kept in memory.
///
/// Covers every page a single query can reach, so no displayed tile is
/// evicted. A new search empties the cache.
pub const THUMBNAIL_CACHE_CAPACITY: usize = {
    let page_size = PageSize::DEFAULT.get() as usize;
    MAX_REACHABLE_RESULTS.div_ceil(page_size) * page_size
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_bounds_are_ordered() {
        assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
        assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    }

    #[test]
    fn column_bounds_are_ordered() {
        assert!(MIN_COLUMNS <= DEFAULT_COLUMNS);
        assert!(DEFAULT_COLUMNS <= MAX_COLUMNS);
    }

    #[test]
    fn thumbnail_cache_holds_every_reachable_page() {
        let page_size = PageSize::DEFAULT.get() as usize;
        assert!(THUMBNAIL_CACHE_CAPACITY >= MAX_REACHABLE_RESULTS);
        assert_eq!(THUMBNAIL_CACHE_CAPACITY % page_size, 0);
        assert_eq!(THUMBNAIL_CACHE_CAPACITY, 504);
    }
}
