//! Keyed repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/get/remove/list over any `Record` type.
//! - Report duplicate and missing keys as semantic errors.
//!
//! # Invariants
//! - A failed `add` leaves the stored record for that key untouched.
//! - `list_all` returns records in ascending key order.

use crate::model::record::Record;
use std::collections::BTreeMap;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic repository failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("record already exists: {0}")]
    DuplicateKey(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("invalid value {value} for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        value: i64,
        reason: String,
    },
}

impl RepoError {
    pub fn not_found(key: &impl ToString) -> Self {
        Self::NotFound(key.to_string())
    }

    pub fn duplicate(key: &impl ToString) -> Self {
        Self::DuplicateKey(key.to_string())
    }

    pub fn invalid(field: &'static str, value: i64, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value,
            reason: reason.into(),
        }
    }
}

/// Repository interface for keyed record CRUD.
pub trait Repository<V: Record> {
    /// Inserts a new record. Fails with `DuplicateKey` when the key is taken.
    fn add(&mut self, record: V) -> RepoResult<()>;
    /// Returns an owned copy of the record for `key`.
    fn get_by_id(&self, key: &V::Key) -> RepoResult<V>;
    /// Deletes and returns the record for `key`.
    fn remove(&mut self, key: &V::Key) -> RepoResult<V>;
    /// Snapshot of all current records.
    fn list_all(&self) -> Vec<V>;
    fn contains(&self, key: &V::Key) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `BTreeMap`-backed repository.
#[derive(Debug, Clone)]
pub struct MemoryRepository<V: Record> {
    records: BTreeMap<V::Key, V>,
}

impl<V: Record> Default for MemoryRepository<V> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<V: Record> MemoryRepository<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from existing records, rejecting duplicate keys.
    pub fn from_records(records: impl IntoIterator<Item = V>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.add(record)?;
        }
        Ok(repo)
    }

    /// Iterates stored records in key order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.records.values()
    }

    /// Mutable access for the validated mutators only.
    pub(crate) fn record_mut(&mut self, key: &V::Key) -> RepoResult<&mut V> {
        self.records
            .get_mut(key)
            .ok_or_else(|| RepoError::not_found(key))
    }
}

impl<V: Record> Repository<V> for MemoryRepository<V> {
    fn add(&mut self, record: V) -> RepoResult<()> {
        let key = record.key();
        if self.records.contains_key(&key) {
            return Err(RepoError::duplicate(&key));
        }
        self.records.insert(key, record);
        Ok(())
    }

    fn get_by_id(&self, key: &V::Key) -> RepoResult<V> {
        self.records
            .get(key)
            .cloned()
            .ok_or_else(|| RepoError::not_found(key))
    }

    fn remove(&mut self, key: &V::Key) -> RepoResult<V> {
        self.records
            .remove(key)
            .ok_or_else(|| RepoError::not_found(key))
    }

    fn list_all(&self) -> Vec<V> {
        self.records.values().cloned().collect()
    }

    fn contains(&self, key: &V::Key) -> bool {
        self.records.contains_key(key)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
