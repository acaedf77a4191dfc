//! JSON-persisted inventory logger.
//!
//! # Responsibility
//! - Load the previous session's snapshot (absent file = empty log).
//! - Assign ids and timestamps to newly logged items.
//! - Save the whole log back as one snapshot.
//!
//! # Invariants
//! - New ids are `max(existing) + 1`, starting at 1; logging fails once
//!   `i64::MAX` is taken.
//! - Nothing reaches disk until `save` is called.

use crate::model::inventory::{InventoryItem, InventoryItemId};
use crate::persist::json_snapshot::{load_snapshot, save_snapshot};
use crate::persist::{LoadOutcome, PersistError};
use crate::repo::keyed_repo::{MemoryRepository, RepoError, RepoResult, Repository};
use crate::repo::mutator::{non_negative, ValidatedMutator};
use crate::service::logged;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

const MODULE: &str = "inventory_log";

pub type InventoryLogResult<T> = Result<T, InventoryLogError>;

#[derive(Debug, Error)]
pub enum InventoryLogError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug)]
pub struct InventoryLogService {
    path: PathBuf,
    items: MemoryRepository<InventoryItem>,
    restored: bool,
}

impl InventoryLogService {
    /// Opens the log stored at `path`.
    ///
    /// A missing file starts an empty log. Duplicate ids inside an existing
    /// snapshot are rejected as `DuplicateKey`.
    pub fn open(path: impl Into<PathBuf>) -> InventoryLogResult<Self> {
        let path = path.into();
        let outcome = load_snapshot::<InventoryItem>(&path)?;
        let restored = !outcome.is_absent();
        let items = match outcome {
            LoadOutcome::Loaded(records) => MemoryRepository::from_records(records)?,
            LoadOutcome::Absent => MemoryRepository::new(),
        };
        Ok(Self {
            path,
            items,
            restored,
        })
    }

    /// Whether `open` found an existing snapshot.
    pub fn restored_from_disk(&self) -> bool {
        self.restored
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Logs a new item stamped with the current time.
    pub fn log_item(&mut self, name: &str, quantity: i64) -> InventoryLogResult<InventoryItem> {
        self.log_item_at(name, quantity, Utc::now())
    }

    /// Logs a new item with an explicit `date_added`.
    pub fn log_item_at(
        &mut self,
        name: &str,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> InventoryLogResult<InventoryItem> {
        let result = non_negative("quantity", quantity)
            .and_then(|()| self.next_id())
            .and_then(|id| {
                let item = InventoryItem::new(id, name, quantity, date_added);
                self.items.add(item.clone()).map(|()| item)
            });
        Ok(logged(MODULE, "item_log", name, result)?)
    }

    pub fn item(&self, id: InventoryItemId) -> InventoryLogResult<InventoryItem> {
        Ok(self.items.get_by_id(&id)?)
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.items.list_all()
    }

    pub fn update_quantity(
        &mut self,
        id: InventoryItemId,
        quantity: i64,
    ) -> InventoryLogResult<()> {
        let result = self.items.update_quantity(&id, quantity);
        Ok(logged(MODULE, "quantity_update", id, result)?)
    }

    pub fn remove_item(&mut self, id: InventoryItemId) -> InventoryLogResult<InventoryItem> {
        let result = self.items.remove(&id);
        Ok(logged(MODULE, "item_remove", id, result)?)
    }

    /// Writes every item to the snapshot file.
    pub fn save(&self) -> InventoryLogResult<()> {
        save_snapshot(&self.items.list_all(), &self.path)?;
        Ok(())
    }

    fn next_id(&self) -> RepoResult<InventoryItemId> {
        match self.items.iter().map(|item| item.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| RepoError::invalid("id", max, "no ids left after this one")),
        }
    }
}
