//! End-to-end: seeded catalog → estimate → split → submission.

use std::sync::Arc;

use chrono::NaiveDate;

use streetfood_catalog::CatalogItemPatch;
use streetfood_core::{CatalogItemId, SupplierId, VendorId};
use streetfood_infra::config::OrderingConfig;
use streetfood_infra::{InMemoryCatalog, InMemoryOrderBook, seed};
use streetfood_ordering::{OrderKind, OrderStatus, VendorRef, place_recipe_order, split};
use streetfood_recipes::{EstimateRequest, IngredientRequest, Shortfall, estimate, find_template};

fn setup() -> (Arc<InMemoryCatalog>, InMemoryOrderBook) {
    let catalog = Arc::new(InMemoryCatalog::seeded());
    let book = InMemoryOrderBook::new(
        catalog.clone(),
        OrderingConfig {
            delivery_lead_days: 2,
            enforce_stock: false,
        },
    )
    .with_fixed_date(NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
    (catalog, book)
}

fn vendor() -> VendorRef {
    seed::vendors().into_iter().next().unwrap()
}

fn onions_and_tomatoes() -> EstimateRequest {
    EstimateRequest::new("Pav Bhaji", 10, 50.0)
        .localized("पाव भाजी")
        .ingredient(IngredientRequest::new("Onions", "प्याज", 2.0, "kg"))
        .ingredient(IngredientRequest::new("Tomatoes", "टमाटर", 1.5, "kg"))
}

fn stock_of(catalog: &InMemoryCatalog, id: u64) -> f64 {
    catalog.get(CatalogItemId::new(id)).unwrap().unwrap().available_quantity
}

#[tokio::test]
async fn scenario_fully_stocked_recipe() {
    let (catalog, _) = setup();

    let est = estimate(&onions_and_tomatoes(), catalog.as_ref()).await.unwrap();

    assert_eq!(est.total_cost, 110.0);
    assert!(est.all_fulfillable);
    assert_eq!(est.suggested_price, 165.0);
}

#[tokio::test]
async fn scenario_under_stocked_ingredient() {
    let (catalog, _) = setup();
    let patch = CatalogItemPatch {
        available_quantity: Some(1.0),
        ..Default::default()
    };
    assert!(catalog.update_item(CatalogItemId::new(2), &patch).unwrap());

    let est = estimate(&onions_and_tomatoes(), catalog.as_ref()).await.unwrap();

    assert!(!est.ingredients[1].fulfillable);
    assert!(!est.all_fulfillable);
    assert_eq!(est.total_cost, 110.0);
}

#[tokio::test]
async fn scenario_unknown_ingredient() {
    let (catalog, _) = setup();
    let request = onions_and_tomatoes().ingredient(IngredientRequest::new("Xyz", "", 1.0, "kg"));

    let est = estimate(&request, catalog.as_ref()).await.unwrap();

    let xyz = &est.ingredients[2];
    assert_eq!(xyz.matched_item_id(), None);
    assert_eq!(xyz.line_cost, 0.0);
    assert!(!xyz.fulfillable);
    assert_eq!(xyz.shortfall(), Some(Shortfall::NotInCatalog));
    assert_eq!(est.total_cost, 110.0);
}

#[tokio::test]
async fn scenario_two_suppliers_split() {
    let (catalog, _) = setup();
    let request = EstimateRequest::new("Aloo Pyaz", 5, 30.0)
        .ingredient(IngredientRequest::new("Onions", "", 1.0, "kg"))
        .ingredient(IngredientRequest::new("Potatoes", "", 3.0, "kg"));

    let est = estimate(&request, catalog.as_ref()).await.unwrap();
    let drafts = split(&est);

    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].supplier_id, SupplierId::new(2));
    assert_eq!(drafts[0].total_amount, 25.0);
    assert_eq!(drafts[0].line_items.len(), 1);
    assert_eq!(drafts[1].supplier_id, SupplierId::new(3));
    assert_eq!(drafts[1].total_amount, 60.0);
    assert_eq!(drafts[1].line_items.len(), 1);
}

#[tokio::test]
async fn scenario_zero_servings() {
    let (catalog, _) = setup();
    let mut request = onions_and_tomatoes();
    request.servings = 0;

    let err = estimate(&request, catalog.as_ref()).await.unwrap_err();

    assert!(err.is_validation());
}

#[tokio::test]
async fn pav_bhaji_template_places_one_order_per_supplier() {
    let (catalog, book) = setup();
    let request = find_template("pav-bhaji").unwrap().to_request(10, 50.0);

    let est = estimate(&request, catalog.as_ref()).await.unwrap();
    assert_eq!(est.total_cost, 240.0);
    assert!(est.all_fulfillable);

    let report = place_recipe_order(&book, &vendor(), &est).await.unwrap();

    assert!(report.is_complete());
    let orders: Vec<_> = report.submitted().cloned().collect();
    assert_eq!(orders.len(), 2);

    assert_eq!(orders[0].supplier_id, SupplierId::new(2));
    assert_eq!(orders[0].total_amount, 160.0);
    let raj_items: Vec<_> = orders[0].line_items.iter().map(|l| l.item_name.as_str()).collect();
    assert_eq!(raj_items, vec!["Onions (प्याज)", "Tomatoes (टमाटर)", "Bread (ब्रेड)"]);

    assert_eq!(orders[1].supplier_id, SupplierId::new(3));
    assert_eq!(orders[1].total_amount, 80.0);

    for order in &orders {
        assert_eq!(order.vendor_id, VendorId::new(4));
        assert_eq!(order.order_kind, OrderKind::Recipe);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.recipe_context.as_ref().unwrap().servings, 10);
    }

    assert_eq!(stock_of(&catalog, 1), 498.0);
    assert_eq!(stock_of(&catalog, 2), 78.5);
    assert_eq!(stock_of(&catalog, 6), 49.5);
    assert_eq!(book.orders_for_vendor(VendorId::new(4)).unwrap().len(), 2);
}

#[tokio::test]
async fn unfulfillable_recipe_is_not_ordered() {
    let (catalog, book) = setup();
    let request = onions_and_tomatoes().ingredient(IngredientRequest::new("Saffron", "केसर", 0.01, "kg"));

    let est = estimate(&request, catalog.as_ref()).await.unwrap();
    let err = place_recipe_order(&book, &vendor(), &est).await.unwrap_err();

    assert!(err.is_validation());
    assert!(book.all().unwrap().is_empty());
    assert_eq!(stock_of(&catalog, 1), 500.0);
}

#[tokio::test]
async fn later_estimates_see_stock_taken_by_earlier_orders() {
    let (catalog, book) = setup();
    let request = EstimateRequest::new("Chilli Fry", 50, 40.0)
        .ingredient(IngredientRequest::new("Green Chilies", "हरी मिर्च", 20.0, "kg"));

    let first = estimate(&request, catalog.as_ref()).await.unwrap();
    assert!(first.all_fulfillable);
    place_recipe_order(&book, &vendor(), &first).await.unwrap();

    let second = estimate(&request, catalog.as_ref()).await.unwrap();
    assert!(!second.all_fulfillable);
    assert_eq!(second.total_cost, first.total_cost);
}

#[tokio::test]
async fn identical_inputs_give_identical_estimates() {
    let (catalog, _) = setup();
    let request = find_template("biryani").unwrap().to_request(25, 60.0);

    let a = estimate(&request, catalog.as_ref()).await.unwrap();
    let b = estimate(&request, catalog.as_ref()).await.unwrap();

    assert_eq!(a, b);
    assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
}

#[tokio::test]
async fn enforced_stock_counts_ingredients_sharing_an_item() {
    let catalog = Arc::new(InMemoryCatalog::seeded());
    let book = InMemoryOrderBook::new(
        catalog.clone(),
        OrderingConfig {
            delivery_lead_days: 2,
            enforce_stock: true,
        },
    );
    let request = EstimateRequest::new("Mirchi Bajji", 10, 50.0)
        .ingredient(IngredientRequest::new("Green Chilies", "", 20.0, "kg"))
        .ingredient(IngredientRequest::new("Chilies", "", 20.0, "kg"));

    let est = estimate(&request, catalog.as_ref()).await.unwrap();
    assert!(est.all_fulfillable);
    assert_eq!(split(&est).len(), 1);

    let report = place_recipe_order(&book, &vendor(), &est).await.unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.submitted().count(), 0);
    assert!(book.all().unwrap().is_empty());
    assert_eq!(stock_of(&catalog, 7), 25.0);
}
