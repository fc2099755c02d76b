//! Cache for decoded flag artwork.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use image::DynamicImage;

/// Maximum number of images to keep in cache
const MAX_CACHE_SIZE: usize = 40;

/// Cache entry for an image
#[derive(Clone)]
struct CachedImage {
    /// The decoded image
    image: Arc<DynamicImage>,
    /// Last access timestamp (for eviction)
    last_access: std::time::Instant,
}

/// Thread-safe cache of decoded flag/coat-of-arms images, keyed by URL.
#[derive(Clone, Default)]
pub struct ImageCache {
    images: Arc<Mutex<HashMap<String, CachedImage>>>,
}

impl ImageCache {
    /// Create a new image cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a decoded image in the cache.
    pub fn insert(&self, url: &str, image: DynamicImage) {
        let mut cache = self.images.lock().unwrap();

        // Evict the least-recently used entry if the cache is full
        if cache.len() >= MAX_CACHE_SIZE {
            if let Some(oldest_key) = cache
                .iter()
                .min_by_key(|(_, v)| v.last_access)
                .map(|(k, _)| k.clone())
            {
                cache.remove(&oldest_key);
            }
        }

        cache.insert(
            url.to_string(),
            CachedImage {
                image: Arc::new(image),
                last_access: std::time::Instant::now(),
            },
        );
    }

    /// Get a decoded image from cache.
    pub fn get(&self, url: &str) -> Option<Arc<DynamicImage>> {
        let mut cache = self.images.lock().unwrap();
        if let Some(entry) = cache.get_mut(url) {
            entry.last_access = std::time::Instant::now();
            Some(Arc::clone(&entry.image))
        } else {
            None
        }
    }

    /// Check if an image is cached.
    pub fn contains(&self, url: &str) -> bool {
        self.images.lock().unwrap().contains_key(url)
    }

    /// Clear the entire cache.
    pub fn clear(&self) {
        self.images.lock().unwrap().clear();
    }

    /// Get the number of cached images.
    pub fn len(&self) -> usize {
        self.images.lock().unwrap().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.images.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_contains() {
        let cache = ImageCache::new();
        assert!(cache.is_empty());

        let img = DynamicImage::new_rgb8(2, 2);
        cache.insert("https://flagcdn.com/w320/pe.png", img);

        assert!(cache.contains("https://flagcdn.com/w320/pe.png"));
        assert!(cache.get("https://flagcdn.com/w320/pe.png").is_some());
        assert!(cache.get("https://flagcdn.com/w320/pt.png").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_eviction_keeps_cache_bounded() {
        let cache = ImageCache::new();
        for i in 0..MAX_CACHE_SIZE + 5 {
            cache.insert(&format!("url-{i}"), DynamicImage::new_rgb8(1, 1));
        }
        assert!(cache.len() <= MAX_CACHE_SIZE);
    }
}
