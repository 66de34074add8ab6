//! Ingredient Resolver: free-text ingredient → catalog entry.

use tracing::debug;

use streetfood_catalog::{CatalogItem, CatalogLookup, matches_ingredient};

use crate::error::EstimateError;
use crate::ingredient::{IngredientRequest, ResolvedIngredient};

/// Resolve a request against an already-fetched candidate list.
///
/// Picks the first candidate (in lookup order) whose name contains the
/// requested name, case-insensitively, or whose localized name contains the
/// requested name or localized name.
pub fn resolve_against(request: IngredientRequest, candidates: &[CatalogItem]) -> ResolvedIngredient {
    let found = candidates
        .iter()
        .find(|item| matches_ingredient(item, &request.name, &request.localized_name));

    match found {
        Some(item) => ResolvedIngredient::matched(request, item),
        None => {
            debug!(ingredient = %request.name, "ingredient not found in catalog");
            ResolvedIngredient::unmatched(request)
        }
    }
}

/// Validate `request`, query the catalog with its name, and resolve it.
///
/// A malformed request is a validation error; an ingredient the catalog does
/// not know is a successful, unmatched resolution.
pub async fn resolve<L>(request: &IngredientRequest, catalog: &L) -> Result<ResolvedIngredient, EstimateError>
where
    L: CatalogLookup + ?Sized,
{
    request.validate()?;
    let candidates = catalog.find_by_name(&request.name).await?;
    Ok(resolve_against(request.clone(), &candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use streetfood_catalog::CatalogError;
    use streetfood_core::{CatalogItemId, SupplierId};

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(CatalogItemId::new(1), "Onions", "प्याज", SupplierId::new(2), "Raj")
                .with_price(25.0, "kg")
                .with_stock(500.0),
            CatalogItem::new(CatalogItemId::new(11), "Spring Onions", "हरा प्याज", SupplierId::new(3), "Mumbai Fresh")
                .with_price(50.0, "kg")
                .with_stock(10.0),
        ]
    }

    struct FailingCatalog;

    #[async_trait]
    impl CatalogLookup for FailingCatalog {
        async fn find_by_name(&self, _query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
            Err(CatalogError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn first_candidate_in_lookup_order_wins() {
        let req = IngredientRequest::new("onion", "", 2.0, "kg");
        let resolved = resolve_against(req, &catalog());
        assert_eq!(resolved.matched_item_id(), Some(CatalogItemId::new(1)));
        assert_eq!(resolved.line_cost, 50.0);
        assert!(resolved.fulfillable);
    }

    #[test]
    fn candidates_that_do_not_contain_the_name_are_skipped() {
        let req = IngredientRequest::new("Spring", "", 1.0, "kg");
        let resolved = resolve_against(req, &catalog());
        assert_eq!(resolved.matched_item_id(), Some(CatalogItemId::new(11)));
    }

    #[tokio::test]
    async fn resolve_queries_the_catalog() {
        let req = IngredientRequest::new("प्याज", "", 1.0, "kg");
        let resolved = resolve(&req, &catalog()).await.unwrap();
        assert_eq!(resolved.matched_item_id(), Some(CatalogItemId::new(1)));
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_catalog() {
        let req = IngredientRequest::new("Onions", "", 0.0, "kg");
        let err = resolve(&req, &FailingCatalog).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn catalog_failure_is_propagated() {
        let req = IngredientRequest::new("Onions", "", 1.0, "kg");
        let err = resolve(&req, &FailingCatalog).await.unwrap_err();
        assert_eq!(err.catalog(), Some(&CatalogError::Unavailable("offline".into())));
    }
}
