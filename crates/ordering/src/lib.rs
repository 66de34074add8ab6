//! Ordering domain module: supplier-partitioned order drafts and their submission.
//!
//! A recipe estimate is split into one [`OrderDraft`] per supplier; each draft
//! is handed to an injected [`OrderSink`] independently. There is no
//! cross-draft transaction: a failure on one supplier leaves earlier ones placed.

pub mod draft;
pub mod placement;
pub mod record;
pub mod sink;
pub mod split;

pub use draft::{DraftLine, OrderDraft, OrderKind, RecipeContext, individual_draft};
pub use placement::{PlacementOutcome, PlacementReport, place_recipe_order};
pub use record::{OrderRecord, OrderStatus, VendorRef};
pub use sink::{OrderSink, SubmissionError};
pub use split::split;
