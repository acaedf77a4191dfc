//! Warehouse product record.

use crate::model::record::{Quantified, Record};
use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// Stocked product tracked by the warehouse tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units on hand. Never negative once stored.
    pub quantity: i64,
    /// Aisle/bin label, e.g. `A-03`.
    pub location: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            location: location.into(),
        }
    }
}

impl Record for Product {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.id
    }
}

impl Quantified for Product {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}
