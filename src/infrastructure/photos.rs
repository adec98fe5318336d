// SPDX-License-Identifier: MPL-2.0
//! Download cache for remote photos.
//!
//! Local photos are handed to Iced by path. Photos served by the content API
//! are downloaded once, kept in an LRU cache keyed by URL and handed to Iced
//! as in-memory image handles.
//!
//! # Usage
//!
//! ```ignore
//! // When the viewer opens, request every remote photo of the session
//! for url in cache.request(&urls) {
//!     tasks.push(Task::perform(photos::download(client.clone(), url.clone()), ...));
//! }
//!
//! // When a download finishes
//! cache.complete(&url, result);
//! ```

use crate::app::config::{MAX_PHOTO_CACHE_ENTRIES, MIN_PHOTO_CACHE_ENTRIES};
use crate::error::{CatalogError, Result};
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cached state of one remote photo.
#[derive(Debug, Clone)]
pub enum CachedPhoto {
    /// Download in flight.
    Pending,
    Ready(Handle),
    /// Download failed; not retried until evicted.
    Failed,
}

/// LRU cache of downloaded photos.
pub struct PhotoCache {
    cache: LruCache<String, CachedPhoto>,
}

impl std::fmt::Debug for PhotoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}

impl PhotoCache {
    /// Creates a cache holding at most `entries` photos, clamped to the
    /// supported range.
    #[must_use]
    pub fn new(entries: usize) -> Self {
        let clamped = entries.clamp(MIN_PHOTO_CACHE_ENTRIES, MAX_PHOTO_CACHE_ENTRIES);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns the cached state of `url` without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&CachedPhoto> {
        self.cache.peek(url)
    }

    /// Returns the image handle of `url` if it finished downloading.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.cache.peek(url) {
            Some(CachedPhoto::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Marks every unknown URL as pending and returns those that must be
    /// downloaded. Known URLs are promoted in the LRU order.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a String>) -> Vec<String> {
        let mut missing = Vec::new();
        for url in urls {
            if self.cache.get(url).is_none() {
                self.cache.put(url.clone(), CachedPhoto::Pending);
                missing.push(url.clone());
            }
        }
        missing
    }

    /// Stores the outcome of a download.
    pub fn complete(&mut self, url: &str, bytes: Result<Vec<u8>>) {
        let state = match bytes {
            Ok(bytes) => CachedPhoto::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("failed to download photo {}: {}", url, err);
                CachedPhoto::Failed
            }
        };
        self.cache.put(url.to_string(), state);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Downloads a photo.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with a
/// non-success status.
pub async fn download(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()).into());
    }
    Ok(response.bytes().await?.to_vec())
}
