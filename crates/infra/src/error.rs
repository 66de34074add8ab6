use thiserror::Error;

use streetfood_catalog::CatalogError;
use streetfood_core::DomainError;
use streetfood_ordering::SubmissionError;

/// In-memory store failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0} lock poisoned")]
    Poisoned(&'static str),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::Unavailable(err.to_string())
    }
}

impl From<StoreError> for SubmissionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => SubmissionError::Rejected(e.to_string()),
            StoreError::Poisoned(_) => SubmissionError::Unavailable(err.to_string()),
        }
    }
}
