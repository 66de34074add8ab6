//! Built-in marketplace data: two Mumbai suppliers' raw materials and the
//! vendors that buy from them.

use chrono::NaiveDate;

use streetfood_catalog::CatalogItem;
use streetfood_core::{CatalogItemId, SupplierId, VendorId};
use streetfood_ordering::VendorRef;

const RAJ: (u64, &str) = (2, "Raj Wholesale Supplies");
const MUMBAI_FRESH: (u64, &str) = (3, "Mumbai Fresh Mart");

struct SeedItem {
    id: u64,
    name: &'static str,
    localized_name: &'static str,
    category: &'static str,
    unit_price: f64,
    available: f64,
    unit: &'static str,
    supplier: (u64, &'static str),
    description: &'static str,
    last_updated: (i32, u32, u32),
}

const ITEMS: &[SeedItem] = &[
    SeedItem { id: 1, name: "Onions", localized_name: "प्याज", category: "Vegetables", unit_price: 25.0, available: 500.0, unit: "kg", supplier: RAJ, description: "Fresh red onions from Nashik", last_updated: (2024, 1, 27) },
    SeedItem { id: 2, name: "Tomatoes", localized_name: "टमाटर", category: "Vegetables", unit_price: 40.0, available: 80.0, unit: "kg", supplier: RAJ, description: "Fresh tomatoes from Pune", last_updated: (2024, 1, 27) },
    SeedItem { id: 3, name: "Potatoes", localized_name: "आलू", category: "Vegetables", unit_price: 20.0, available: 300.0, unit: "kg", supplier: MUMBAI_FRESH, description: "Quality potatoes from Maharashtra", last_updated: (2024, 1, 26) },
    SeedItem { id: 4, name: "Basmati Rice", localized_name: "बासमती चावल", category: "Grains", unit_price: 80.0, available: 200.0, unit: "kg", supplier: MUMBAI_FRESH, description: "Premium basmati rice", last_updated: (2024, 1, 27) },
    SeedItem { id: 5, name: "Turmeric Powder", localized_name: "हल्दी पाउडर", category: "Spices", unit_price: 200.0, available: 30.0, unit: "kg", supplier: RAJ, description: "Pure turmeric powder from Karnataka", last_updated: (2024, 1, 27) },
    SeedItem { id: 6, name: "Cooking Oil", localized_name: "खाना पकाने का तेल", category: "Oil & Condiments", unit_price: 120.0, available: 50.0, unit: "liters", supplier: MUMBAI_FRESH, description: "Refined sunflower oil", last_updated: (2024, 1, 27) },
    SeedItem { id: 7, name: "Green Chilies", localized_name: "हरी मिर्च", category: "Vegetables", unit_price: 60.0, available: 25.0, unit: "kg", supplier: RAJ, description: "Fresh green chilies", last_updated: (2024, 1, 27) },
    SeedItem { id: 8, name: "Ginger", localized_name: "अदरक", category: "Spices", unit_price: 80.0, available: 40.0, unit: "kg", supplier: RAJ, description: "Fresh ginger root", last_updated: (2024, 1, 27) },
    SeedItem { id: 9, name: "Garlic", localized_name: "लहसुन", category: "Spices", unit_price: 100.0, available: 35.0, unit: "kg", supplier: MUMBAI_FRESH, description: "Fresh garlic cloves", last_updated: (2024, 1, 27) },
    SeedItem { id: 10, name: "Bread", localized_name: "ब्रेड", category: "Bakery", unit_price: 25.0, available: 100.0, unit: "packets", supplier: RAJ, description: "Fresh bread packets", last_updated: (2024, 1, 27) },
];

/// The built-in raw-material catalog, in catalog order.
pub fn catalog_items() -> Vec<CatalogItem> {
    ITEMS
        .iter()
        .map(|s| {
            let (supplier_id, supplier_name) = s.supplier;
            let (y, m, d) = s.last_updated;
            let mut item = CatalogItem::new(
                CatalogItemId::new(s.id),
                s.name,
                s.localized_name,
                SupplierId::new(supplier_id),
                supplier_name,
            )
            .with_price(s.unit_price, s.unit)
            .with_stock(s.available)
            .with_category(s.category)
            .with_description(s.description);
            item.last_updated = NaiveDate::from_ymd_opt(y, m, d);
            item
        })
        .collect()
}

/// Vendors registered on the marketplace.
pub fn vendors() -> Vec<VendorRef> {
    [
        (4, "Ramesh Street Food"),
        (5, "Priya's Chaat Corner"),
        (6, "Arjun's Biryani Hub"),
    ]
    .into_iter()
    .map(|(id, name)| VendorRef::new(VendorId::new(id), name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_items_satisfy_catalog_invariants() {
        let items = catalog_items();
        assert_eq!(items.len(), 10);
        for item in &items {
            item.validate().unwrap();
            assert!(item.last_updated.is_some());
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = catalog_items().iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
