mod errors;
mod service;
mod types;

pub use service::DocumentService;
pub use types::{DeleteOutcome, DocumentDownload, DocumentStream};
