//! Order submission collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use streetfood_core::CatalogItemId;

use crate::draft::OrderDraft;
use crate::record::{OrderRecord, VendorRef};

/// Why the order collaborator refused or failed a draft.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("order rejected: {0}")]
    Rejected(String),

    #[error("catalog item {0} no longer exists")]
    UnknownItem(CatalogItemId),

    #[error("insufficient stock for item {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: CatalogItemId,
        requested: f64,
        available: f64,
    },

    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// Persists one draft as an order.
///
/// Each call is independent; implementations own any stock bookkeeping and
/// retry policy.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn submit_order(&self, vendor: &VendorRef, draft: &OrderDraft) -> Result<OrderRecord, SubmissionError>;
}

#[async_trait]
impl<T> OrderSink for Arc<T>
where
    T: OrderSink + ?Sized,
{
    async fn submit_order(&self, vendor: &VendorRef, draft: &OrderDraft) -> Result<OrderRecord, SubmissionError> {
        (**self).submit_order(vendor, draft).await
    }
}
