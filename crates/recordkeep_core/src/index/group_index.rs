//! One-to-many index from an owner key to its dependent records.
//!
//! # Responsibility
//! - Group dependents by `Dependent::owner_key` on explicit rebuild.
//! - Answer lookups without failing: missing groups are empty.
//!
//! # Invariants
//! - `rebuild` replaces all previous content; cost is O(n) in the source.
//! - Within a group, dependents keep source order.

use crate::model::record::Dependent;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct GroupIndex<D: Dependent> {
    groups: BTreeMap<D::OwnerKey, Vec<D>>,
}

impl<D: Dependent> Default for GroupIndex<D> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<D: Dependent> GroupIndex<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh index over `source`.
    pub fn build(source: impl IntoIterator<Item = D>) -> Self {
        let mut index = Self::new();
        index.rebuild(source);
        index
    }

    /// Clears the index and regroups every record in `source`.
    pub fn rebuild(&mut self, source: impl IntoIterator<Item = D>) {
        self.groups.clear();
        for record in source {
            self.groups
                .entry(record.owner_key())
                .or_default()
                .push(record);
        }
    }

    /// Dependents of `owner`, or an empty slice.
    pub fn lookup(&self, owner: &D::OwnerKey) -> &[D] {
        self.groups.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Owner keys that currently have at least one dependent.
    pub fn owner_keys(&self) -> Vec<D::OwnerKey> {
        self.groups.keys().cloned().collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of indexed dependents.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
