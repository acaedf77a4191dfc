//! Repository layer: keyed in-memory storage and validated mutation.
//!
//! # Responsibility
//! - Define the keyed CRUD contract shared by every scenario.
//! - Keep field validation ahead of any state change.
//!
//! # Invariants
//! - No two stored records share a key.
//! - Reads hand out owned copies; the only write paths are `add`, `remove`
//!   and the validated mutators.

pub mod keyed_repo;
pub mod mutator;
