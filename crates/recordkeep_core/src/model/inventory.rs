//! Inventory log item, persisted as a JSON snapshot.
//!
//! # Invariants
//! - Serialized field names are `Id`, `Name`, `Quantity`, `DateAdded`.
//! - `DateAdded` is written as an RFC 3339 UTC timestamp.

use crate::model::record::{Quantified, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type InventoryItemId = i64;

/// One logged inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: InventoryItemId,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Record for InventoryItem {
    type Key = InventoryItemId;

    fn key(&self) -> InventoryItemId {
        self.id
    }
}

impl Quantified for InventoryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}
