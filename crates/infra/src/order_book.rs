//! In-memory order book: the order-submission collaborator.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::info;

use streetfood_core::{DomainError, OrderId, SupplierId, VendorId};
use streetfood_ordering::{OrderDraft, OrderRecord, OrderSink, OrderStatus, SubmissionError, VendorRef};

use crate::catalog_store::InMemoryCatalog;
use crate::config::OrderingConfig;
use crate::error::StoreError;

/// Orders submitted during this process, backed by a shared catalog whose
/// stock each accepted order draws down.
#[derive(Debug)]
pub struct InMemoryOrderBook {
    catalog: Arc<InMemoryCatalog>,
    config: OrderingConfig,
    /// Pins the order date (tests); `None` means "today, UTC".
    fixed_date: Option<NaiveDate>,
    orders: RwLock<Vec<OrderRecord>>,
}

impl InMemoryOrderBook {
    pub fn new(catalog: Arc<InMemoryCatalog>, config: OrderingConfig) -> Self {
        Self {
            catalog,
            config,
            fixed_date: None,
            orders: RwLock::new(Vec::new()),
        }
    }

    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    pub fn catalog(&self) -> &Arc<InMemoryCatalog> {
        &self.catalog
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<OrderRecord>>, StoreError> {
        self.orders.read().map_err(|_| StoreError::Poisoned("order book"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<OrderRecord>>, StoreError> {
        self.orders.write().map_err(|_| StoreError::Poisoned("order book"))
    }

    pub fn get(&self, id: OrderId) -> Result<Option<OrderRecord>, StoreError> {
        Ok(self.read()?.iter().find(|o| o.id == id).cloned())
    }

    pub fn all(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(self.read()?.clone())
    }

    pub fn orders_for_vendor(&self, vendor_id: VendorId) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|o| o.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    pub fn orders_for_supplier(&self, supplier_id: SupplierId) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|o| o.supplier_id == supplier_id)
            .cloned()
            .collect())
    }

    /// Set an order's status. Returns `false` when no order has `id`.
    ///
    /// Delivered, cancelled and rejected orders keep their status.
    pub fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<bool, StoreError> {
        let mut orders = self.write()?;
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(false);
        };
        if order.status.is_terminal() && order.status != status {
            return Err(DomainError::invariant(format!(
                "order {id} is {:?} and cannot become {status:?}",
                order.status
            ))
            .into());
        }
        info!(order_id = %id, from = ?order.status, to = ?status, "order status updated");
        order.status = status;
        Ok(true)
    }
}

#[async_trait]
impl OrderSink for InMemoryOrderBook {
    async fn submit_order(&self, vendor: &VendorRef, draft: &OrderDraft) -> Result<OrderRecord, SubmissionError> {
        if draft.is_empty() {
            return Err(SubmissionError::Rejected("order has no line items".into()));
        }

        // Held across stock-taking so ids stay dense and ordered.
        let mut orders = self.write()?;
        self.catalog.take_stock(&draft.line_items, self.config.enforce_stock)?;

        let next_id = orders.iter().map(|o| o.id.get()).max().unwrap_or(0) + 1;
        let record = OrderRecord::from_draft(
            OrderId::new(next_id),
            vendor,
            draft,
            self.today(),
            self.config.delivery_lead_days,
        );
        orders.push(record.clone());
        Ok(record)
    }
}
