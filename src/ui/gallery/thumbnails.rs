// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of downloaded thumbnails.
//!
//! Entries are keyed by result id. Each new search bumps the cache
//! generation; downloads started for an older generation are ignored when
//! they complete.

use crate::app::config::THUMBNAIL_CACHE_CAPACITY;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Load state of a single thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct ThumbnailCache {
    entries: LruCache<u64, Thumbnail>,
    generation: u64,
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(THUMBNAIL_CACHE_CAPACITY)
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            generation: 0,
        }
    }

    /// Current generation, attached to every download request.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drops every entry and invalidates in-flight downloads.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Marks `id` as loading if it has no entry yet.
    ///
    /// Returns `true` when the caller should start a download.
    pub fn begin(&mut self, id: u64) -> bool {
        if self.entries.contains(&id) {
            return false;
        }
        self.entries.put(id, Thumbnail::Loading);
        true
    }

    /// Records a finished download. Results from an older generation are ignored.
    pub fn finish(&mut self, id: u64, generation: u64, bytes: Option<Vec<u8>>) {
        if generation != self.generation {
            return;
        }
        let entry = match bytes {
            Some(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
            None => Thumbnail::Failed,
        };
        self.entries.put(id, entry);
    }

    /// Looks up a thumbnail without touching recency.
    #[must_use]
    pub fn peek(&self, id: u64) -> Option<&Thumbnail> {
        self.entries.peek(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_only_once_per_id() {
        let mut cache = ThumbnailCache::new(4);
        assert!(cache.begin(1));
        assert!(!cache.begin(1));
        assert!(matches!(cache.peek(1), Some(Thumbnail::Loading)));
    }

    #[test]
    fn finish_stores_ready_or_failed() {
        let mut cache = ThumbnailCache::new(4);
        let generation = cache.generation();
        cache.begin(1);
        cache.begin(2);

        cache.finish(1, generation, Some(vec![0u8; 4]));
        cache.finish(2, generation, None);

        assert!(matches!(cache.peek(1), Some(Thumbnail::Ready(_))));
        assert!(matches!(cache.peek(2), Some(Thumbnail::Failed)));
    }

    #[test]
    fn reset_discards_entries_and_late_downloads() {
        let mut cache = ThumbnailCache::new(4);
        let old = cache.generation();
        cache.begin(1);

        cache.reset();
        assert!(cache.is_empty());

        cache.finish(1, old, Some(vec![1, 2, 3]));
        assert!(cache.peek(1).is_none());
    }

    #[test]
    fn capacity_is_bounded() {
        let mut cache = ThumbnailCache::new(2);
        cache.begin(1);
        cache.begin(2);
        cache.begin(3);

        assert_eq!(cache.len(), 2);
        assert!(cache.peek(1).is_none());
        assert!(cache.peek(3).is_some());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut cache = ThumbnailCache::new(0);
        cache.begin(7);
        assert_eq!(cache.len(), 1);
    }
}
