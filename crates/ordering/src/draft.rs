use serde::{Deserialize, Serialize};

use streetfood_catalog::CatalogItem;
use streetfood_core::{CatalogItemId, DomainError, DomainResult, SupplierId, ValueObject};

/// What kind of purchase produced an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Individual,
    Recipe,
}

/// Which recipe (and how many servings) a recipe order was placed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeContext {
    pub recipe_name: String,
    pub servings: u32,
}

/// Order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftLine {
    pub catalog_item_id: CatalogItemId,
    /// `"<name> (<localized name>)"`.
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_cost: f64,
}

/// A not-yet-submitted order to a single supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub line_items: Vec<DraftLine>,
    pub total_amount: f64,
    pub order_kind: OrderKind,
    pub recipe_context: Option<RecipeContext>,
}

impl OrderDraft {
    pub fn new(
        supplier_id: SupplierId,
        supplier_name: impl Into<String>,
        order_kind: OrderKind,
        recipe_context: Option<RecipeContext>,
    ) -> Self {
        Self {
            supplier_id,
            supplier_name: supplier_name.into(),
            line_items: Vec::new(),
            total_amount: 0.0,
            order_kind,
            recipe_context,
        }
    }

    /// Append a line and keep `total_amount` in step.
    pub fn push_line(&mut self, line: DraftLine) {
        self.total_amount += line.line_cost;
        self.line_items.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

impl ValueObject for OrderDraft {}

/// Single-item order straight from the catalog (no recipe).
pub fn individual_draft(item: &CatalogItem, quantity: f64) -> DomainResult<OrderDraft> {
    if !(quantity > 0.0) || !quantity.is_finite() {
        return Err(DomainError::validation("quantity must be positive"));
    }

    let mut draft = OrderDraft::new(item.supplier_id, item.supplier_name.clone(), OrderKind::Individual, None);
    draft.push_line(DraftLine {
        catalog_item_id: item.id,
        item_name: item.display_name(),
        quantity,
        unit_price: item.unit_price,
        line_cost: quantity * item.unit_price,
    });
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potatoes() -> CatalogItem {
        CatalogItem::new(CatalogItemId::new(3), "Potatoes", "आलू", SupplierId::new(3), "Mumbai Fresh Mart")
            .with_price(20.0, "kg")
            .with_stock(300.0)
    }

    #[test]
    fn individual_draft_has_one_line() {
        let draft = individual_draft(&potatoes(), 5.0).unwrap();

        assert_eq!(draft.order_kind, OrderKind::Individual);
        assert_eq!(draft.recipe_context, None);
        assert_eq!(draft.supplier_id, SupplierId::new(3));
        assert_eq!(draft.line_items.len(), 1);
        assert_eq!(draft.line_items[0].item_name, "Potatoes (आलू)");
        assert_eq!(draft.total_amount, 100.0);
    }

    #[test]
    fn individual_draft_rejects_non_positive_quantity() {
        let err = individual_draft(&potatoes(), 0.0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
            _ => panic!("Expected Validation for zero quantity"),
        }
    }

    #[test]
    fn push_line_accumulates_total() {
        let mut draft = OrderDraft::new(SupplierId::new(1), "S", OrderKind::Recipe, None);
        assert!(draft.is_empty());
        for cost in [10.0, 2.5] {
            draft.push_line(DraftLine {
                catalog_item_id: CatalogItemId::new(1),
                item_name: "X".into(),
                quantity: 1.0,
                unit_price: cost,
                line_cost: cost,
            });
        }
        assert_eq!(draft.total_amount, 12.5);
    }
}
