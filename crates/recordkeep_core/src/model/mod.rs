//! Domain records for every record-keeping scenario.
//!
//! # Responsibility
//! - Define the record shapes owned by repositories and indexes.
//! - Expose identity (`Record`), ownership (`Dependent`) and quantity
//!   (`Quantified`) through small traits so the storage layer stays generic.
//!
//! # Invariants
//! - A record's key never changes after construction.
//! - Equality for lookup purposes is key-based; field equality is only used
//!   by tests and round-trip checks.

pub mod finance;
pub mod inventory;
pub mod patient;
pub mod record;
pub mod student;
pub mod warehouse;
