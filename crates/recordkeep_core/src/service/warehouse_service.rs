//! Warehouse inventory tracker.
//!
//! # Responsibility
//! - Product CRUD plus stock movements (restock, ship).
//!
//! # Invariants
//! - Stock never goes negative: shipments larger than stock are rejected
//!   before any change.

use crate::model::warehouse::{Product, ProductId};
use crate::repo::keyed_repo::{MemoryRepository, RepoError, RepoResult, Repository};
use crate::repo::mutator::{non_negative, positive, ValidatedMutator};
use crate::service::logged;

const MODULE: &str = "warehouse";

/// Use-case service over any validated product repository.
pub struct WarehouseService<R: ValidatedMutator<Product> = MemoryRepository<Product>> {
    repo: R,
}

impl WarehouseService<MemoryRepository<Product>> {
    /// Service over an empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(MemoryRepository::new())
    }
}

impl<R: ValidatedMutator<Product>> WarehouseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a product; its starting quantity must not be negative.
    pub fn add_product(&mut self, product: Product) -> RepoResult<()> {
        let id = product.id;
        let result =
            non_negative("quantity", product.quantity).and_then(|()| self.repo.add(product));
        logged(MODULE, "product_add", id, result)
    }

    pub fn product(&self, id: ProductId) -> RepoResult<Product> {
        self.repo.get_by_id(&id)
    }

    pub fn remove_product(&mut self, id: ProductId) -> RepoResult<Product> {
        let result = self.repo.remove(&id);
        logged(MODULE, "product_remove", id, result)
    }

    /// Products in ascending id order.
    pub fn list_products(&self) -> Vec<Product> {
        self.repo.list_all()
    }

    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> RepoResult<()> {
        let result = self.repo.update_quantity(&id, quantity);
        logged(MODULE, "quantity_update", id, result)
    }

    /// Adds `amount` (> 0) units to stock.
    ///
    /// A restock that would overflow the stored quantity is rejected.
    pub fn restock(&mut self, id: ProductId, amount: i64) -> RepoResult<()> {
        let result = self.restock_inner(id, amount);
        logged(MODULE, "restock", id, result)
    }

    fn restock_inner(&mut self, id: ProductId, amount: i64) -> RepoResult<()> {
        positive("amount", amount)?;
        let on_hand = self.repo.get_by_id(&id)?.quantity;
        let restocked = on_hand.checked_add(amount).ok_or_else(|| {
            RepoError::invalid("amount", amount, format!("overflows stock of {on_hand}"))
        })?;
        self.repo.update_quantity(&id, restocked)
    }

    /// Removes `amount` (> 0, at most the current stock) units.
    pub fn ship(&mut self, id: ProductId, amount: i64) -> RepoResult<()> {
        let result = self.ship_inner(id, amount);
        logged(MODULE, "ship", id, result)
    }

    fn ship_inner(&mut self, id: ProductId, amount: i64) -> RepoResult<()> {
        positive("amount", amount)?;
        let on_hand = self.repo.get_by_id(&id)?.quantity;
        if amount > on_hand {
            return Err(RepoError::invalid(
                "amount",
                amount,
                format!("exceeds stock of {on_hand}"),
            ));
        }
        self.repo.update_quantity(&id, on_hand - amount)
    }

    /// Products whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<Product> {
        self.repo
            .list_all()
            .into_iter()
            .filter(|product| product.quantity < threshold)
            .collect()
    }

    /// Sum of all quantities, widened so it cannot overflow.
    pub fn total_units(&self) -> i128 {
        self.repo
            .list_all()
            .iter()
            .map(|product| i128::from(product.quantity))
            .sum()
    }
}
