//! Recipe order placement: split, then submit each supplier draft in turn.

use serde::Serialize;
use tracing::{info, warn};

use streetfood_core::{DomainError, SupplierId};
use streetfood_recipes::RecipeEstimate;

use crate::record::{OrderRecord, VendorRef};
use crate::sink::{OrderSink, SubmissionError};
use crate::split::split;

/// Result of submitting one supplier draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlacementOutcome {
    Submitted(OrderRecord),
    Failed {
        supplier_id: SupplierId,
        #[serde(serialize_with = "serialize_error")]
        error: SubmissionError,
    },
}

fn serialize_error<S: serde::Serializer>(error: &SubmissionError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

/// Per-draft outcomes, in draft order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlacementReport {
    pub outcomes: Vec<PlacementOutcome>,
}

impl PlacementReport {
    pub fn submitted(&self) -> impl Iterator<Item = &OrderRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            PlacementOutcome::Submitted(record) => Some(record),
            PlacementOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (SupplierId, &SubmissionError)> {
        self.outcomes.iter().filter_map(|o| match o {
            PlacementOutcome::Failed { supplier_id, error } => Some((*supplier_id, error)),
            PlacementOutcome::Submitted(_) => None,
        })
    }

    /// Every draft was accepted.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Place a recipe order: one submission per supplier, sequentially.
///
/// Refuses (without submitting anything) unless every ingredient is
/// fulfillable. A submission failure is recorded and the remaining drafts
/// are still attempted; drafts already accepted stay accepted.
pub async fn place_recipe_order<S>(
    sink: &S,
    vendor: &VendorRef,
    estimate: &RecipeEstimate,
) -> Result<PlacementReport, DomainError>
where
    S: OrderSink + ?Sized,
{
    if !estimate.all_fulfillable {
        return Err(DomainError::validation(
            "recipe has ingredients that cannot be fulfilled",
        ));
    }

    let mut report = PlacementReport::default();
    for draft in split(estimate) {
        match sink.submit_order(vendor, &draft).await {
            Ok(record) => {
                info!(
                    order_id = %record.id,
                    supplier_id = %draft.supplier_id,
                    total_amount = record.total_amount,
                    "recipe order submitted"
                );
                report.outcomes.push(PlacementOutcome::Submitted(record));
            }
            Err(error) => {
                warn!(supplier_id = %draft.supplier_id, error = %error, "recipe order submission failed");
                report.outcomes.push(PlacementOutcome::Failed {
                    supplier_id: draft.supplier_id,
                    error,
                });
            }
        }
    }

    Ok(report)
}
