//! Test helpers: build AppState and router for integration tests.
//!
//! Storage is a temp dir; the catalog is the in-memory one, so these tests need neither
//! Docker nor a running database.

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use docvault_api::constants::API_PREFIX;
use docvault_api::setup::routes;
use docvault_api::state::AppState;
use docvault_core::Config;
use docvault_db::{DocumentCatalog, InMemoryDocumentCatalog, UnconfiguredCatalog};
use docvault_services::{DocumentService, LocalStorage, Storage};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// API path prefix for tests (e.g. `/api`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// Test application: server and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub catalog: Arc<InMemoryDocumentCatalog>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn stored_files(&self) -> Vec<String> {
        std::fs::read_dir(self.upload_dir())
            .expect("Failed to read upload dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect()
    }
}

fn test_config(upload_dir: &Path) -> Config {
    let upload_dir = upload_dir.to_string_lossy().into_owned();
    Config::from_lookup(|key| match key {
        "UPLOAD_DIR" => Some(upload_dir.clone()),
        "MAX_UPLOAD_SIZE_BYTES" => Some((1024 * 1024).to_string()),
        _ => None,
    })
    .expect("Failed to build test config")
}

async fn build_server(temp_dir: &TempDir, catalog: Arc<dyn DocumentCatalog>) -> TestServer {
    let config = test_config(temp_dir.path());
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path())
            .await
            .expect("Failed to create local storage"),
    );

    let state = Arc::new(AppState::new(DocumentService::new(storage, catalog)));
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");

    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

/// Setup test app with an in-memory catalog and local storage in a temp dir.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let catalog = Arc::new(InMemoryDocumentCatalog::new());
    let server = build_server(&temp_dir, catalog.clone()).await;

    TestApp {
        server,
        catalog,
        temp_dir,
    }
}

/// Setup test app the way the process runs without `DATABASE_URL`.
pub async fn setup_unconfigured_app() -> (TestServer, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let server = build_server(&temp_dir, Arc::new(UnconfiguredCatalog)).await;
    (server, temp_dir)
}

/// POST a single-part upload.
pub async fn upload(
    client: &TestServer,
    data: Vec<u8>,
    filename: &str,
    mime_type: &str,
) -> TestResponse {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type(mime_type.to_string());
    let form = MultipartForm::new().add_part("file", part);

    client
        .post(&api_path("/documents/upload"))
        .multipart(form)
        .await
}
