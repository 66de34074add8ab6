//! Name matching.
//!
//! Plain substring containment, deliberately kept as-is: the first candidate
//! that contains the requested name wins, with no scoring. The primary name
//! is compared case-insensitively; localized names (Devanagari and friends)
//! are compared verbatim.

use crate::item::CatalogItem;

/// Catalog search predicate: lowercase substring on the name, or plain
/// substring on the localized name.
pub fn matches_search(item: &CatalogItem, term: &str) -> bool {
    item.name.to_lowercase().contains(&term.to_lowercase()) || item.localized_name.contains(term)
}

/// Does `item` satisfy an ingredient request for `name` / `localized_name`?
///
/// Same rule as [`matches_search`], plus the request's own localized name
/// (when given) may match the item's localized name.
pub fn matches_ingredient(item: &CatalogItem, name: &str, localized_name: &str) -> bool {
    if matches_search(item, name) {
        return true;
    }
    let localized_name = localized_name.trim();
    !localized_name.is_empty() && item.localized_name.contains(localized_name)
}
