pub mod document;

pub use document::{DeleteResponse, Document, DocumentResponse};
