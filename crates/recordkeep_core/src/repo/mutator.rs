//! Validated field mutation over keyed repositories.
//!
//! # Invariants
//! - Validation runs before the key lookup; a rejected value never touches
//!   stored state.
//! - A missing key is reported as `NotFound` even when the value is valid.

use crate::model::record::{Quantified, Record};
use crate::repo::keyed_repo::{MemoryRepository, RepoError, RepoResult, Repository};

/// Rejects negative values.
pub fn non_negative(field: &'static str, value: i64) -> RepoResult<()> {
    if value < 0 {
        return Err(RepoError::invalid(field, value, "must not be negative"));
    }
    Ok(())
}

/// Rejects zero and negative values.
pub fn positive(field: &'static str, value: i64) -> RepoResult<()> {
    if value <= 0 {
        return Err(RepoError::invalid(field, value, "must be greater than zero"));
    }
    Ok(())
}

/// Write path for repositories whose records carry validated fields.
pub trait ValidatedMutator<V: Record>: Repository<V> {
    /// Validates `value`, then applies it to the record stored under `key`.
    fn update_validated<T, F, A>(
        &mut self,
        key: &V::Key,
        value: T,
        validate: F,
        apply: A,
    ) -> RepoResult<()>
    where
        F: FnOnce(&T) -> RepoResult<()>,
        A: FnOnce(&mut V, T);

    /// Overwrites the quantity of `key` with `new_value`.
    ///
    /// Fails with `InvalidValue` when `new_value < 0`, and with `NotFound`
    /// when the key is absent.
    fn update_quantity(&mut self, key: &V::Key, new_value: i64) -> RepoResult<()>
    where
        V: Quantified,
    {
        self.update_validated(
            key,
            new_value,
            |value| non_negative("quantity", *value),
            |record, value| record.set_quantity(value),
        )
    }
}

impl<V: Record> ValidatedMutator<V> for MemoryRepository<V> {
    fn update_validated<T, F, A>(
        &mut self,
        key: &V::Key,
        value: T,
        validate: F,
        apply: A,
    ) -> RepoResult<()>
    where
        F: FnOnce(&T) -> RepoResult<()>,
        A: FnOnce(&mut V, T),
    {
        validate(&value)?;
        let record = self.record_mut(key)?;
        apply(record, value);
        Ok(())
    }
}
