//! Raw-material catalog: the items suppliers list, and the lookup boundary the
//! recipe estimator resolves ingredient names against.
//!
//! The catalog itself is owned elsewhere (see `streetfood-infra`); this crate
//! only defines its shape, the lookup collaborator, and the name-matching rule.

pub mod item;
pub mod lookup;
pub mod matching;

pub use item::{CatalogItem, CatalogItemPatch};
pub use lookup::{CatalogError, CatalogLookup};
pub use matching::{matches_ingredient, matches_search};
