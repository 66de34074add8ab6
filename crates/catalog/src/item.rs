use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use streetfood_core::{CatalogItemId, DomainError, DomainResult, Entity, SupplierId};

/// A purchasable raw material listed by one supplier.
///
/// Read-only from the estimator's point of view; only the catalog owner
/// changes stock or price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    /// Name in the vendor's local language (e.g. Hindi).
    pub localized_name: String,
    pub category: String,
    pub unit_price: f64,
    pub available_quantity: f64,
    pub unit: String,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
}

impl CatalogItem {
    /// Minimal constructor; price and stock start at zero.
    pub fn new(
        id: CatalogItemId,
        name: impl Into<String>,
        localized_name: impl Into<String>,
        supplier_id: SupplierId,
        supplier_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            localized_name: localized_name.into(),
            category: String::new(),
            unit_price: 0.0,
            available_quantity: 0.0,
            unit: String::new(),
            supplier_id,
            supplier_name: supplier_name.into(),
            description: String::new(),
            last_updated: None,
        }
    }

    pub fn with_price(mut self, unit_price: f64, unit: impl Into<String>) -> Self {
        self.unit_price = unit_price;
        self.unit = unit.into();
        self
    }

    pub fn with_stock(mut self, available_quantity: f64) -> Self {
        self.available_quantity = available_quantity;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// `"<name> (<localized name>)"`, the label used on order lines.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.localized_name)
    }

    /// Check the catalog invariants: non-negative, finite price and stock.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("catalog item name cannot be empty"));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(DomainError::validation(format!(
                "unit price must be a non-negative number (item {})",
                self.id
            )));
        }
        if !self.available_quantity.is_finite() || self.available_quantity < 0.0 {
            return Err(DomainError::validation(format!(
                "available quantity must be a non-negative number (item {})",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for CatalogItem {
    type Id = CatalogItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update of a catalog item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemPatch {
    pub name: Option<String>,
    pub localized_name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub available_quantity: Option<f64>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

impl CatalogItemPatch {
    /// Apply the patch, rejecting it (and leaving `item` unchanged) if the
    /// result would break the catalog invariants.
    pub fn apply_to(&self, item: &mut CatalogItem, today: NaiveDate) -> DomainResult<()> {
        let mut updated = item.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(localized_name) = &self.localized_name {
            updated.localized_name = localized_name.clone();
        }
        if let Some(category) = &self.category {
            updated.category = category.clone();
        }
        if let Some(unit_price) = self.unit_price {
            updated.unit_price = unit_price;
        }
        if let Some(available_quantity) = self.available_quantity {
            updated.available_quantity = available_quantity;
        }
        if let Some(unit) = &self.unit {
            updated.unit = unit.clone();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        updated.validate()?;
        updated.last_updated = Some(today);
        *item = updated;
        Ok(())
    }
}
