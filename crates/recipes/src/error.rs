use thiserror::Error;

use streetfood_catalog::CatalogError;
use streetfood_core::DomainError;

/// Why an estimate could not be produced at all.
///
/// An ingredient that is missing from the catalog or under-stocked is *not*
/// an error; see [`crate::Shortfall`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    /// The request was structurally invalid; nothing was looked up.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The catalog collaborator failed mid-estimate.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl EstimateError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(e) if e.is_validation())
    }

    pub fn catalog(&self) -> Option<&CatalogError> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
