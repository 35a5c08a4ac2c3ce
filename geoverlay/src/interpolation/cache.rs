//! Bounded LRU cache of resolved paths.

use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::hash::CacheKey;
use super::ResolvedPath;

/// Fixed-capacity map with least-recently-used eviction.
///
/// Every `get` hit and `put` stamps the entry with a monotonically
/// increasing tick; the `recency` index maps ticks back to keys so the
/// oldest entry is always the first one in the tree.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    tick: u64,
    entries: HashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
}

impl<K: Clone + Eq + Hash, V> LruCache<K, V> {
    /// Create an empty cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            tick: 0,
            entries: HashMap::with_capacity(capacity),
            recency: BTreeMap::new(),
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Look up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let tick = self.next_tick();
        let (_, stamp) = self.entries.get_mut(key)?;
        let previous = std::mem::replace(stamp, tick);
        if let Some(k) = self.recency.remove(&previous) {
            self.recency.insert(tick, k);
        }
        self.entries.get(key).map(|(value, _)| value)
    }

    /// Insert or replace `key`, evicting the least recently used entry when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        let tick = self.next_tick();

        if let Some((_, previous)) = self.entries.insert(key.clone(), (value, tick)) {
            self.recency.remove(&previous);
            self.recency.insert(tick, key);
            return None;
        }
        self.recency.insert(tick, key);

        if self.entries.len() <= self.capacity {
            return None;
        }
        let (_, oldest) = self.recency.pop_first()?;
        self.entries
            .remove(&oldest)
            .map(|(value, _)| (oldest, value))
    }

    /// Check for `key` without touching recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }
}

/// Thread-safe path cache shared by all reconciliations of one renderer.
///
/// One mutex guards the whole map, so a lookup and the insert that follows
/// a miss happen atomically.
#[derive(Debug)]
pub struct InterpolationCache {
    inner: Mutex<LruCache<CacheKey, ResolvedPath>>,
}

impl InterpolationCache {
    /// Create a cache holding at most `capacity` paths.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Get a cached path.
    pub fn get(&self, key: &CacheKey) -> Option<ResolvedPath> {
        self.inner.lock().get(key).cloned()
    }

    /// Store a path, evicting the least recently used one if full.
    pub fn put(&self, key: CacheKey, path: ResolvedPath) {
        self.inner.lock().put(key, path);
    }

    /// Return the cached path for `key`, or compute, store and return it.
    ///
    /// The lock is held while `compute` runs. An `Err` from `compute` is
    /// passed through and nothing is stored.
    pub fn get_or_try_insert_with<E, F>(&self, key: CacheKey, compute: F) -> Result<ResolvedPath, E>
    where
        F: FnOnce() -> Result<ResolvedPath, E>,
    {
        let mut cache = self.inner.lock();
        if let Some(path) = cache.get(&key) {
            return Ok(path.clone());
        }
        let path = compute()?;
        cache.put(key, path.clone());
        Ok(path)
    }

    /// Check for `key` without affecting eviction order.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.inner.lock().contains(key)
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no paths are cached.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of cached paths.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Drop all cached paths.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
