//! Core record-keeping logic shared by every scenario.
//! This crate owns storage invariants; the CLI only sequences calls.

pub mod config;
pub mod index;
pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod service;

pub use config::RunConfig;
pub use index::group_index::GroupIndex;
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::finance::{Account, Transaction, TransactionKind};
pub use model::inventory::InventoryItem;
pub use model::patient::{Patient, Prescription};
pub use model::record::{Dependent, Quantified, Record};
pub use model::student::{Grade, StudentRecord};
pub use model::warehouse::Product;
pub use persist::{FormatError, LoadOutcome, PersistError, PersistResult};
pub use repo::keyed_repo::{MemoryRepository, RepoError, RepoResult, Repository};
pub use repo::mutator::ValidatedMutator;
pub use service::finance_service::{FinanceError, FinanceService};
pub use service::inventory_log_service::{InventoryLogError, InventoryLogService};
pub use service::pharmacy_service::PharmacyService;
pub use service::warehouse_service::WarehouseService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
