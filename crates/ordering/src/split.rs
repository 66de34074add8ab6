//! Order Splitter: one draft per supplier.

use indexmap::IndexMap;

use streetfood_core::SupplierId;
use streetfood_recipes::RecipeEstimate;

use crate::draft::{DraftLine, OrderDraft, OrderKind, RecipeContext};

/// Partition the matched, fulfillable ingredients of `estimate` by supplier.
///
/// Drafts come out in order of each supplier's first appearance; lines within
/// a draft keep ingredient order. Unmatched and under-stocked ingredients are
/// left out of every draft, so callers placing a real order should check
/// `estimate.all_fulfillable` first.
pub fn split(estimate: &RecipeEstimate) -> Vec<OrderDraft> {
    let context = RecipeContext {
        recipe_name: estimate.recipe_name.clone(),
        servings: estimate.servings,
    };

    let mut groups: IndexMap<SupplierId, OrderDraft> = IndexMap::new();
    for ingredient in estimate.ingredients.iter().filter(|i| i.fulfillable) {
        let Some(matched) = &ingredient.matched else {
            continue;
        };

        groups
            .entry(matched.supplier_id)
            .or_insert_with(|| {
                OrderDraft::new(
                    matched.supplier_id,
                    matched.supplier_name.clone(),
                    OrderKind::Recipe,
                    Some(context.clone()),
                )
            })
            .push_line(DraftLine {
                catalog_item_id: matched.item_id,
                item_name: ingredient.display_name(),
                quantity: ingredient.request.quantity,
                unit_price: matched.unit_price,
                line_cost: ingredient.line_cost,
            });
    }

    groups.into_values().collect()
}
