//! Catalog lookup collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::item::CatalogItem;
use crate::matching::matches_search;

/// Failure of the catalog collaborator itself.
///
/// "Nothing matched" is **not** an error: lookups return an empty list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Name search over the live catalog.
///
/// Implementations may suspend (remote store, simulated latency) but must not
/// mutate catalog state.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Items whose name or localized name contains `query`, in catalog order.
    async fn find_by_name(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError>;
}

#[async_trait]
impl<T> CatalogLookup for Arc<T>
where
    T: CatalogLookup + ?Sized,
{
    async fn find_by_name(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        (**self).find_by_name(query).await
    }
}

/// A fixed snapshot of items is itself a lookup (tests, offline estimates).
#[async_trait]
impl CatalogLookup for Vec<CatalogItem> {
    async fn find_by_name(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self
            .iter()
            .filter(|item| matches_search(item, query))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetfood_core::{CatalogItemId, SupplierId};

    fn snapshot() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(CatalogItemId::new(1), "Onions", "प्याज", SupplierId::new(2), "Raj"),
            CatalogItem::new(CatalogItemId::new(4), "Basmati Rice", "बासमती चावल", SupplierId::new(3), "Mumbai Fresh"),
        ]
    }

    #[tokio::test]
    async fn snapshot_search_is_case_insensitive_on_name() {
        let found = snapshot().find_by_name("rice").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, CatalogItemId::new(4));
    }

    #[tokio::test]
    async fn snapshot_search_matches_localized_name() {
        let found = snapshot().find_by_name("प्याज").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Onions");
    }

    #[tokio::test]
    async fn no_match_is_empty_not_error() {
        let lookup = Arc::new(snapshot());
        assert!(lookup.find_by_name("Xyz").await.unwrap().is_empty());
    }
}
