//! Infrastructure layer: in-memory collaborators, seed data, config.
//!
//! The domain crates only see the [`CatalogLookup`] and [`OrderSink`] traits;
//! this crate provides process-local implementations of both, sharing one
//! catalog so that submitted orders draw down stock.
//!
//! [`CatalogLookup`]: streetfood_catalog::CatalogLookup
//! [`OrderSink`]: streetfood_ordering::OrderSink

pub mod catalog_store;
pub mod config;
pub mod error;
pub mod order_book;
pub mod seed;

pub use catalog_store::InMemoryCatalog;
pub use config::AppConfig;
pub use error::StoreError;
pub use order_book::InMemoryOrderBook;
