use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use streetfood_core::{Entity, OrderId, SupplierId, VendorId};

use crate::draft::{DraftLine, OrderDraft, OrderKind, RecipeContext};

/// Order status lifecycle, as driven by the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Rejected,
}

impl OrderStatus {
    /// No further transitions are expected from a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Rejected)
    }
}

/// The vendor on whose behalf an order is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRef {
    pub id: VendorId,
    pub name: String,
}

impl VendorRef {
    pub fn new(id: VendorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A submitted order, as persisted by the order collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub line_items: Vec<DraftLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub estimated_delivery: NaiveDate,
    pub order_kind: OrderKind,
    pub recipe_context: Option<RecipeContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderRecord {
    /// Materialize a draft as a new pending order.
    ///
    /// Delivery is estimated as `order_date + lead_days`.
    pub fn from_draft(
        id: OrderId,
        vendor: &VendorRef,
        draft: &OrderDraft,
        order_date: NaiveDate,
        lead_days: u32,
    ) -> Self {
        let estimated_delivery = order_date
            .checked_add_days(Days::new(u64::from(lead_days)))
            .unwrap_or(order_date);

        Self {
            id,
            vendor_id: vendor.id,
            vendor_name: vendor.name.clone(),
            supplier_id: draft.supplier_id,
            supplier_name: draft.supplier_name.clone(),
            line_items: draft.line_items.clone(),
            total_amount: draft.total_amount,
            status: OrderStatus::Pending,
            order_date,
            estimated_delivery,
            order_kind: draft.order_kind,
            recipe_context: draft.recipe_context.clone(),
            notes: None,
        }
    }
}

impl Entity for OrderRecord {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
