//! LRU cache of assembled plates keyed by (date, hour, style).
//!
//! A ranged scan touches the same double-hour charts many times (once
//! per category reference, and again across overlapping requests), so
//! plates are shared behind `Rc` and evicted least-recently-used.

use std::num::NonZeroUsize;
use std::rc::Rc;

use lru::LruCache;
use qimen_calendar::LeapMethod;
use qimen_plate::{Plate, PlateKind};

use crate::error::SearchError;

/// Default number of cached plates.
pub const DEFAULT_CACHE_CAPACITY: usize = 500;

/// Cache key: everything that determines a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Clock hour 0-23 (the start of the double-hour).
    pub hour: u32,
    pub kind: PlateKind,
    pub leap: LeapMethod,
}

/// Shared-ownership LRU plate cache.
pub struct PlateCache {
    inner: LruCache<PlateKey, Rc<Plate>>,
}

impl PlateCache {
    /// Cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache holding at most `capacity` plates (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: LruCache::new(capacity),
        }
    }

    /// Looks up a plate, marking it most recently used.
    pub fn get(&mut self, key: &PlateKey) -> Option<Rc<Plate>> {
        self.inner.get(key).cloned()
    }

    /// Inserts a plate, evicting the least recently used on overflow.
    pub fn put(&mut self, key: PlateKey, plate: Rc<Plate>) {
        self.inner.put(key, plate);
    }

    /// Cached plate for `key`, building and inserting it on a miss.
    pub fn get_or_build<F>(&mut self, key: PlateKey, build: F) -> Result<Rc<Plate>, SearchError>
    where
        F: FnOnce(&PlateKey) -> Result<Plate, SearchError>,
    {
        if let Some(plate) = self.inner.get(&key) {
            return Ok(Rc::clone(plate));
        }
        let plate = Rc::new(build(&key)?);
        self.inner.put(key, Rc::clone(&plate));
        Ok(plate)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.cap().get()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for PlateCache {
    fn default() -> Self {
        Self::new()
    }
}
