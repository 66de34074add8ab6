//! Recipe cost estimation.
//!
//! Given a recipe (name, servings, ingredient requests) this crate resolves
//! each ingredient against the catalog, totals the cost, checks stock, and
//! derives a suggested sale price from a profit margin. Everything here is
//! deterministic; the only IO is the injected [`CatalogLookup`].
//!
//! [`CatalogLookup`]: streetfood_catalog::CatalogLookup

pub mod error;
pub mod estimate;
pub mod ingredient;
pub mod pricing;
pub mod resolver;
pub mod templates;

pub use error::EstimateError;
pub use estimate::{EstimateRequest, RecipeEstimate, estimate};
pub use ingredient::{CatalogMatch, IngredientRequest, ResolvedIngredient, Shortfall};
pub use pricing::{PricingBreakdown, suggested_price};
pub use resolver::{resolve, resolve_against};
pub use templates::{RecipeTemplate, TemplateIngredient, find_template, templates};
