//! Catalog repositories
//!
//! `DocumentCatalog` is the query contract the coordinator depends on. The Postgres
//! implementation is used in production; `UnconfiguredCatalog` stands in when no connection
//! string was supplied, and the in-memory catalog backs tests.

pub mod catalog;
pub mod document;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod unconfigured;

pub use catalog::DocumentCatalog;
pub use document::PgDocumentCatalog;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryDocumentCatalog;
pub use unconfigured::UnconfiguredCatalog;
