//! String key-value interface and the in-memory backend.
//!
//! [`KvStore`] is the seam between the content logic and wherever the data
//! actually lives: local storage in the browser, a map in tests, a file for
//! the operator tooling.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// A string-keyed store of string values.
///
/// Reads are infallible: a missing key is `None`. Writes may fail, for
/// example when a backend enforces a size quota.
pub trait KvStore {
    /// Return the value stored at `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects or fails the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory [`KvStore`] with an optional size quota.
///
/// Size is counted as the byte length of every key plus every value, which
/// approximates how browsers account local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store with no quota.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: None,
        }
    }

    /// Create an empty store that rejects writes past `quota` bytes.
    pub const fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Total bytes currently held (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .fold(0usize, |acc, (k, v)| {
                acc.saturating_add(k.len()).saturating_add(v.len())
            })
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let replaced = self
                .entries
                .get(key)
                .map_or(0, |old| key.len().saturating_add(old.len()));
            let required = self
                .used_bytes()
                .saturating_sub(replaced)
                .saturating_add(key.len())
                .saturating_add(value.len());
            if required > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_owned(),
                    required,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
