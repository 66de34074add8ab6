use serde::{Deserialize, Serialize};

use streetfood_catalog::CatalogItem;
use streetfood_core::{CatalogItemId, DomainError, DomainResult, SupplierId, ValueObject};

/// One ingredient line as the vendor typed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequest {
    pub name: String,
    #[serde(default)]
    pub localized_name: String,
    pub quantity: f64,
    pub unit: String,
}

impl IngredientRequest {
    pub fn new(
        name: impl Into<String>,
        localized_name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            localized_name: localized_name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("ingredient name cannot be empty"));
        }
        // NaN fails this comparison too.
        if !(self.quantity > 0.0) || !self.quantity.is_finite() {
            return Err(DomainError::validation(format!(
                "quantity for '{}' must be positive",
                self.name
            )));
        }
        Ok(())
    }
}

impl ValueObject for IngredientRequest {}

/// The catalog entry an ingredient resolved to, captured at estimate time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMatch {
    pub item_id: CatalogItemId,
    pub item_name: String,
    pub unit_price: f64,
    pub available_quantity: f64,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
}

impl From<&CatalogItem> for CatalogMatch {
    fn from(item: &CatalogItem) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            unit_price: item.unit_price,
            available_quantity: item.available_quantity,
            supplier_id: item.supplier_id,
            supplier_name: item.supplier_name.clone(),
        }
    }
}

/// Why a resolved ingredient cannot be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shortfall {
    NotInCatalog,
    InsufficientStock { requested: f64, available: f64 },
}

/// An ingredient request plus what the catalog said about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIngredient {
    #[serde(flatten)]
    pub request: IngredientRequest,
    /// `None` when no catalog item matched.
    pub matched: Option<CatalogMatch>,
    /// `quantity * unit_price`; zero when unmatched.
    pub line_cost: f64,
    /// Matched and enough stock for the requested quantity.
    pub fulfillable: bool,
}

impl ResolvedIngredient {
    pub fn unmatched(request: IngredientRequest) -> Self {
        Self {
            request,
            matched: None,
            line_cost: 0.0,
            fulfillable: false,
        }
    }

    pub fn matched(request: IngredientRequest, item: &CatalogItem) -> Self {
        let line_cost = request.quantity * item.unit_price;
        let fulfillable = item.available_quantity >= request.quantity;
        Self {
            request,
            matched: Some(CatalogMatch::from(item)),
            line_cost,
            fulfillable,
        }
    }

    pub fn matched_item_id(&self) -> Option<CatalogItemId> {
        self.matched.as_ref().map(|m| m.item_id)
    }

    pub fn supplier_id(&self) -> Option<SupplierId> {
        self.matched.as_ref().map(|m| m.supplier_id)
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    /// `"<name> (<localized name>)"` as the vendor entered it.
    pub fn display_name(&self) -> String {
        if self.request.localized_name.is_empty() {
            self.request.name.clone()
        } else {
            format!("{} ({})", self.request.name, self.request.localized_name)
        }
    }

    /// What stands in the way of fulfilling this ingredient, if anything.
    pub fn shortfall(&self) -> Option<Shortfall> {
        match &self.matched {
            None => Some(Shortfall::NotInCatalog),
            Some(_) if self.fulfillable => None,
            Some(m) => Some(Shortfall::InsufficientStock {
                requested: self.request.quantity,
                available: m.available_quantity,
            }),
        }
    }
}

impl ValueObject for ResolvedIngredient {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomatoes(stock: f64) -> CatalogItem {
        CatalogItem::new(CatalogItemId::new(2), "Tomatoes", "टमाटर", SupplierId::new(2), "Raj")
            .with_price(40.0, "kg")
            .with_stock(stock)
    }

    #[test]
    fn zero_or_negative_quantity_is_invalid() {
        assert!(IngredientRequest::new("Onions", "", 0.0, "kg").validate().is_err());
        assert!(IngredientRequest::new("Onions", "", -1.0, "kg").validate().is_err());
        assert!(IngredientRequest::new("Onions", "", f64::NAN, "kg").validate().is_err());
        assert!(IngredientRequest::new("Onions", "", 0.25, "kg").validate().is_ok());
    }

    #[test]
    fn blank_name_is_invalid() {
        let err = IngredientRequest::new("   ", "", 1.0, "kg").validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn under_stocked_match_reports_shortfall() {
        let req = IngredientRequest::new("Tomatoes", "टमाटर", 1.5, "kg");
        let resolved = ResolvedIngredient::matched(req, &tomatoes(1.0));

        assert_eq!(resolved.line_cost, 60.0);
        assert!(!resolved.fulfillable);
        assert_eq!(
            resolved.shortfall(),
            Some(Shortfall::InsufficientStock {
                requested: 1.5,
                available: 1.0
            })
        );
    }

    #[test]
    fn exact_stock_is_enough() {
        let req = IngredientRequest::new("Tomatoes", "", 80.0, "kg");
        let resolved = ResolvedIngredient::matched(req, &tomatoes(80.0));
        assert!(resolved.fulfillable);
        assert_eq!(resolved.shortfall(), None);
    }

    #[test]
    fn unmatched_has_no_cost() {
        let resolved = ResolvedIngredient::unmatched(IngredientRequest::new("Xyz", "", 1.0, "kg"));
        assert_eq!(resolved.line_cost, 0.0);
        assert_eq!(resolved.matched_item_id(), None);
        assert_eq!(resolved.shortfall(), Some(Shortfall::NotInCatalog));
        assert_eq!(resolved.display_name(), "Xyz");
    }
}
