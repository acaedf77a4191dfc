//! Derived secondary indexes.
//!
//! # Invariants
//! - Indexes are never authoritative; they can always be rebuilt from the
//!   primary collection.

pub mod group_index;
