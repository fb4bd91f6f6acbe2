//! Application state shared by all handlers.

use docvault_services::DocumentService;

#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentService,
}

impl AppState {
    pub fn new(documents: DocumentService) -> Self {
        Self { documents }
    }
}
