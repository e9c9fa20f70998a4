//! Format cache for repeated renders.
//!
//! Chat views re-render the same messages on every poll. The cache memoises
//! formatted documents keyed by a stable hash of config and content.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::format::{FormatConfig, Formatter};
use crate::hash::StableHasher;
use crate::node::Document;

/// Default upper bound on cached documents.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

// =============================================================================
// Cache Key
// =============================================================================

/// Cache key derived from formatter config and input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Derive the key for formatting `content` under `config`.
    pub fn new(config: &FormatConfig, content: &str) -> Self {
        Self(
            StableHasher::new()
                .update_u64(config.fingerprint())
                .update_str(content)
                .finish(),
        )
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// =============================================================================
// Cache Entry
// =============================================================================

/// A cached document with its hit counter.
///
/// The counter is atomic so lookups only need the read lock.
#[derive(Debug)]
pub struct CacheEntry {
    /// The cached document.
    pub doc: Arc<Document>,
    hits: AtomicU64,
}

impl CacheEntry {
    pub fn new(doc: Arc<Document>) -> Self {
        Self {
            doc,
            hits: AtomicU64::new(0),
        }
    }

    /// Lookups served by this entry.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    fn record_hit(&self) -> Arc<Document> {
        self.hits.fetch_add(1, Ordering::Relaxed);
        Arc::clone(&self.doc)
    }
}

impl Clone for CacheEntry {
    fn clone(&self) -> Self {
        Self {
            doc: Arc::clone(&self.doc),
            hits: AtomicU64::new(self.hits()),
        }
    }
}

/// Non-thread-safe format cache.
pub type FormatCache = FxHashMap<CacheKey, CacheEntry>;

/// Hit/miss counters of a shared cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

// =============================================================================
// Shared Format Cache
// =============================================================================

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Thread-safe shared format cache.
///
/// Uses `parking_lot::RwLock` for better performance under contention.
/// When full, the whole map is dropped before the next insert.
#[derive(Debug, Clone)]
pub struct SharedFormatCache {
    inner: Arc<RwLock<FormatCache>>,
    counters: Arc<Counters>,
    max_entries: usize,
}

impl Default for SharedFormatCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFormatCache {
    /// Create a new empty cache with [`DEFAULT_MAX_ENTRIES`].
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache holding at most `max_entries` documents (minimum 1).
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FxHashMap::default())),
            counters: Arc::default(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Execute a closure with read access to the cache.
    pub fn with_read<R>(&self, f: impl FnOnce(&FormatCache) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with write access to the cache.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut FormatCache) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Return the cached document for `content`, formatting it on a miss.
    pub fn get_or_format(&self, formatter: &Formatter, content: &str) -> Arc<Document> {
        let key = CacheKey::new(formatter.config(), content);
        if let Some(doc) = self.get(&key) {
            return doc;
        }

        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("format cache miss for {key}");
        // Format outside the lock; a racing thread may insert the same key.
        let doc = Arc::new(formatter.format(content));
        self.insert(key, Arc::clone(&doc));
        doc
    }

    /// Look up a document and count the hit.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Document>> {
        let doc = self.with_read(|c| c.get(key).map(CacheEntry::record_hit))?;
        self.counters.hits.fetch_add(1, Ordering::Relaxed);
        Some(doc)
    }

    /// Insert or replace a cache entry, evicting everything when full.
    pub fn insert(&self, key: CacheKey, doc: Arc<Document>) {
        let max_entries = self.max_entries;
        self.with_write(|c| {
            if c.len() >= max_entries && !c.contains_key(&key) {
                log::debug!("format cache full ({} entries), clearing", c.len());
                c.clear();
            }
            c.insert(key, CacheEntry::new(doc));
        });
    }

    /// Remove an entry from the cache.
    pub fn remove(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.with_write(|c| c.remove(key))
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.with_read(|c| c.contains_key(key))
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.with_read(|c| c.len())
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries from the cache. Counters are kept.
    pub fn clear(&self) {
        self.with_write(|c| c.clear());
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
