//! Identity and field-access traits shared by all records.

use std::fmt::{Debug, Display};

/// A keyed entity stored in a repository.
///
/// The key is the identity: two records with the same key are the same
/// record as far as storage is concerned.
pub trait Record: Clone {
    /// Unique identifier type (integer ids, account numbers, ...).
    type Key: Ord + Clone + Debug + Display;

    /// Returns the record's immutable key.
    fn key(&self) -> Self::Key;
}

/// A record that belongs to an owning record through a foreign key.
pub trait Dependent: Clone {
    type OwnerKey: Ord + Clone + Debug;

    /// Returns the key of the owning record.
    fn owner_key(&self) -> Self::OwnerKey;
}

/// A record carrying a non-negative quantity field.
pub trait Quantified {
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}
