// SPDX-License-Identifier: MPL-2.0
//! Search value objects.

use std::fmt;
use std::num::NonZeroU32;

// =============================================================================
// Query
// =============================================================================

/// User-entered search text, guaranteed to be non-blank.
///
/// Surrounding whitespace is trimmed on construction, so `"  cats "` and
/// `"cats"` are the same query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Creates a query from raw input.
    ///
    /// Returns `None` if the input is empty or whitespace-only.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Page
// =============================================================================

/// 1-based index of a block of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(NonZeroU32);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page from a 1-based number. Returns `None` for zero.
    #[must_use]
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Self)
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following page, saturating at `u32::MAX`.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of results requested per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Page size used for the whole session.
    pub const DEFAULT: Self = Self(match NonZeroU32::new(12) {
        Some(size) => size,
        None => unreachable!(),
    });

    /// Creates a page size. Returns `None` for zero.
    #[must_use]
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(Self)
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of results covered by pages `1..=page`.
    #[must_use]
    pub fn covered_by(self, page: Page) -> u64 {
        u64::from(self.get()) * u64::from(page.get())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// ImageResult
// =============================================================================

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    /// Identifier assigned by the search provider.
    pub id: u64,
    /// Small image shown in the gallery grid.
    pub thumbnail_url: String,
    /// Full-size image shown in the preview overlay.
    pub full_url: String,
    /// Descriptive text (tags) used as alt text and caption.
    pub alt: String,
}

// =============================================================================
// SearchPage
// =============================================================================

/// A page of results as returned by the image search provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Total number of matches for the query.
    pub total: u64,
    /// Results of the requested page, in provider order.
    pub items: Vec<ImageResult>,
}
