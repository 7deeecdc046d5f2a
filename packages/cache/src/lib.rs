#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Keyed in-process cache with insertion timestamps and optional expiry.
//!
//! Each entry remembers when it was inserted. Lookups treat entries older
//! than the configured TTL as missing, so the next caller transparently
//! repopulates them. Population is expected to be idempotent: two callers
//! racing on the same key both compute the value and the last insert wins.
//! No lock is held while a value is being computed.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};

/// A cached value and the moment it was stored.
#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

/// A thread-safe map from keys to timestamped values.
///
/// `V` is usually an `Arc<T>` so that hits are cheap to clone.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    entries: RwLock<BTreeMap<K, Entry<V>>>,
    ttl: Option<TimeDelta>,
}

impl<K: Ord + Clone, V: Clone> TtlCache<K, V> {
    /// Creates a cache whose entries expire `ttl` after insertion.
    #[must_use]
    pub const fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            ttl: Some(ttl),
        }
    }

    /// Creates a cache whose entries live for the process lifetime.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            ttl: None,
        }
    }

    /// Expiry window, if any.
    #[must_use]
    pub const fn ttl(&self) -> Option<TimeDelta> {
        self.ttl
    }

    /// Returns the value for `key` if it is present and fresh.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Utc::now())
    }

    /// Returns the value for `key` if it is present and fresh at `now`.
    #[must_use]
    pub fn get_at(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if self.is_expired(entry, now) {
            log::debug!("Cache entry expired (inserted at {})", entry.inserted_at);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Utc::now());
    }

    /// Stores `value` under `key` as if inserted at `now`.
    pub fn insert_at(&self, key: K, value: V, now: DateTime<Utc>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            Entry {
                value,
                inserted_at: now,
            },
        );
    }

    /// Returns the cached value or computes, stores and returns a new one.
    ///
    /// Errors from `populate` are returned as-is and nothing is cached.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `populate`.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: &K,
        populate: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = populate()?;
        self.insert(key.clone(), value.clone());
        Ok(value)
    }

    /// Runs `update` on the fresh entry for `key` and restamps it at `now`.
    ///
    /// Returns `None` (and drops the entry) if it is missing or expired. The
    /// write lock is held for the duration of `update`, so concurrent
    /// updates of one key are serialized.
    pub fn update_at<R>(
        &self,
        key: &K,
        now: DateTime<Utc>,
        update: impl FnOnce(&mut V) -> R,
    ) -> Option<R> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if self.is_expired(entry, now) {
            entries.remove(key);
            return None;
        }
        let entry = entries.get_mut(key)?;
        entry.inserted_at = now;
        Some(update(&mut entry.value))
    }

    /// Removes the entry for `key`, returning whether one existed.
    pub fn invalidate(&self, key: &K) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    /// Drops entries that are expired at `now`.
    pub fn purge_expired_at(&self, now: DateTime<Utc>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| !self.is_expired(entry, now));
    }

    /// Number of stored entries, fresh or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, entry: &Entry<V>, now: DateTime<Utc>) -> bool {
        self.ttl.is_some_and(|ttl| now - entry.inserted_at >= ttl)
    }
}
