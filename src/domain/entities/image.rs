//! Domain types for fetched images.

use std::collections::HashMap;

use bytes::Bytes;

/// Raw bytes of one fetched image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob(Bytes);

impl ImageBlob {
    /// Wraps fetched bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the byte length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no bytes were received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Bytes> for ImageBlob {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<&'static [u8]> for ImageBlob {
    fn from(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }
}

/// Lookup from resolved URL to image bytes, built once per session.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    images: HashMap<String, ImageBlob>,
}

impl ImageCache {
    /// Builds the lookup by pairing each URL with the blob at the same index.
    /// On duplicate URLs the later entry wins.
    #[must_use]
    pub fn from_fetch(urls: &[String], blobs: &[ImageBlob]) -> Self {
        let images = urls
            .iter()
            .cloned()
            .zip(blobs.iter().cloned())
            .collect();
        Self { images }
    }

    /// Returns the blob for a resolved URL.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageBlob> {
        self.images.get(url)
    }

    /// Returns the number of distinct URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if nothing was cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterates over `(url, blob)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImageBlob)> {
        self.images.iter().map(|(url, blob)| (url.as_str(), blob))
    }

    /// Total bytes held.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.images.values().map(ImageBlob::len).sum()
    }
}
