//! In-memory raw-material catalog.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use tracing::debug;

use streetfood_catalog::{CatalogError, CatalogItem, CatalogItemPatch, CatalogLookup, matches_search};
use streetfood_core::{CatalogItemId, SupplierId};
use streetfood_ordering::{DraftLine, SubmissionError};

use crate::error::StoreError;
use crate::seed;

/// Process-local catalog, kept in insertion order.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<Vec<CatalogItem>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in raw materials.
    pub fn seeded() -> Self {
        Self {
            items: RwLock::new(seed::catalog_items()),
        }
    }

    pub fn with_items(items: Vec<CatalogItem>) -> Result<Self, StoreError> {
        let catalog = Self::new();
        for item in items {
            catalog.upsert(item)?;
        }
        Ok(catalog)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<CatalogItem>>, StoreError> {
        self.items.read().map_err(|_| StoreError::Poisoned("catalog"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<CatalogItem>>, StoreError> {
        self.items.write().map_err(|_| StoreError::Poisoned("catalog"))
    }

    /// Insert a new item or replace the one with the same id.
    pub fn upsert(&self, item: CatalogItem) -> Result<(), StoreError> {
        item.validate()?;
        let mut items = self.write()?;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Ok(())
    }

    pub fn get(&self, id: CatalogItemId) -> Result<Option<CatalogItem>, StoreError> {
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    pub fn all(&self) -> Result<Vec<CatalogItem>, StoreError> {
        Ok(self.read()?.clone())
    }

    pub fn by_supplier(&self, supplier_id: SupplierId) -> Result<Vec<CatalogItem>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|item| item.supplier_id == supplier_id)
            .cloned()
            .collect())
    }

    /// Name / localized-name search, in catalog order.
    pub fn search(&self, term: &str) -> Result<Vec<CatalogItem>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|item| matches_search(item, term))
            .cloned()
            .collect())
    }

    /// Apply a partial update. Returns `false` when no item has `id`.
    pub fn update_item(&self, id: CatalogItemId, patch: &CatalogItemPatch) -> Result<bool, StoreError> {
        self.update_item_on(id, patch, Utc::now().date_naive())
    }

    pub fn update_item_on(
        &self,
        id: CatalogItemId,
        patch: &CatalogItemPatch,
        today: NaiveDate,
    ) -> Result<bool, StoreError> {
        let mut items = self.write()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        patch.apply_to(item, today)?;
        Ok(true)
    }

    /// Draw stock down for every line of an accepted order.
    ///
    /// Lines for the same item are summed and every item is checked before
    /// anything changes, so a rejected order leaves stock untouched. Without
    /// `enforce_stock`, over-ordering clamps stock at zero instead of failing.
    pub(crate) fn take_stock(&self, lines: &[DraftLine], enforce_stock: bool) -> Result<(), SubmissionError> {
        let mut requested: IndexMap<CatalogItemId, f64> = IndexMap::new();
        for line in lines {
            *requested.entry(line.catalog_item_id).or_insert(0.0) += line.quantity;
        }

        let mut items = self.write()?;

        for (&item_id, &quantity) in &requested {
            let item = items
                .iter()
                .find(|item| item.id == item_id)
                .ok_or(SubmissionError::UnknownItem(item_id))?;
            if enforce_stock && item.available_quantity < quantity {
                return Err(SubmissionError::InsufficientStock {
                    item_id,
                    requested: quantity,
                    available: item.available_quantity,
                });
            }
        }

        for (item_id, quantity) in requested {
            if let Some(item) = items.iter_mut().find(|item| item.id == item_id) {
                item.available_quantity = (item.available_quantity - quantity).max(0.0);
                debug!(item_id = %item.id, remaining = item.available_quantity, "stock taken");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn find_by_name(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.search(query)?)
    }
}
