//! DocVault catalog: schema, connection lifecycle and query contract for document metadata.

pub mod db;

pub use db::{DocumentCatalog, PgDocumentCatalog, UnconfiguredCatalog};
#[cfg(any(test, feature = "test-utils"))]
pub use db::InMemoryDocumentCatalog;
