mod helpers;

use helpers::fixtures::{create_minimal_png, create_test_pdf};
use helpers::{api_path, setup_test_app, setup_unconfigured_app, upload};
use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/health")).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path("/health"))
        .add_header("Origin", "http://localhost:3000")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_upload_over_size_limit_is_rejected() {
    let app = setup_test_app().await;
    let mut pdf = create_test_pdf();
    pdf.resize(2 * 1024 * 1024, b' ');

    let response = upload(app.client(), pdf, "big.pdf", "application/pdf").await;

    assert_ne!(response.status_code(), 200);
    assert!(app.stored_files().is_empty());
    assert!(app.catalog.is_empty());
}

#[tokio::test]
async fn test_upload_pdf() {
    let app = setup_test_app().await;
    let pdf = create_test_pdf();

    let response = upload(app.client(), pdf.clone(), "report.pdf", "application/pdf").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["filename"], "report.pdf");
    assert_eq!(body["filesize"], pdf.len() as i64);
    assert!(body["id"].is_i64());
    assert!(body["created_at"].is_string());

    let stored = body["filepath"].as_str().unwrap();
    assert!(stored.ends_with("_report.pdf"));
    assert_eq!(app.stored_files(), vec![stored.to_string()]);
    assert_eq!(
        std::fs::metadata(app.upload_dir().join(stored)).unwrap().len(),
        pdf.len() as u64
    );
}

#[tokio::test]
async fn test_upload_rejects_non_pdf() {
    let app = setup_test_app().await;

    let response = upload(app.client(), create_minimal_png(), "pixel.png", "image/png").await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Only PDF files are allowed");
    assert_eq!(body["code"], "INVALID_MEDIA_TYPE");
    assert!(app.stored_files().is_empty());
    assert!(app.catalog.is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = setup_test_app().await;
    let form = axum_test::multipart::MultipartForm::new().add_text("note", "no file here");

    let response = app
        .client()
        .post(&api_path("/documents/upload"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_upload_catalog_failure_removes_file() {
    let app = setup_test_app().await;
    app.catalog.set_fail_inserts(true);

    let response = upload(app.client(), create_test_pdf(), "report.pdf", "application/pdf").await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["code"], "CATALOG_WRITE_FAILED");
    assert!(body.get("details").is_none());
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_list_documents_newest_first() {
    let app = setup_test_app().await;

    let empty: Value = app.client().get(&api_path("/documents")).await.json();
    assert_eq!(empty, serde_json::json!([]));

    let mut ids = Vec::new();
    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        let body: Value = upload(app.client(), create_test_pdf(), name, "application/pdf")
            .await
            .json();
        ids.push(body["id"].as_i64().unwrap());
    }

    let response = app.client().get(&api_path("/documents")).await;
    assert_eq!(response.status_code(), 200);

    let listed: Vec<i64> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_get_document() {
    let app = setup_test_app().await;
    let uploaded: Value = upload(app.client(), create_test_pdf(), "report.pdf", "application/pdf")
        .await
        .json();

    let response = app
        .client()
        .get(&api_path(&format!("/documents/{}", uploaded["id"])))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, uploaded);
}

#[tokio::test]
async fn test_get_document_not_found() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/documents/999")).await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_document_invalid_id() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/documents/not-a-number")).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_download_document() {
    let app = setup_test_app().await;
    let pdf = create_test_pdf();
    let uploaded: Value = upload(app.client(), pdf.clone(), "Annual Report.pdf", "application/pdf")
        .await
        .json();

    let response = app
        .client()
        .get(&api_path(&format!("/documents/download/{}", uploaded["id"])))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"Annual Report.pdf\""
    );
    assert_eq!(response.as_bytes().as_ref(), pdf.as_slice());
}

#[tokio::test]
async fn test_download_missing_file_is_404() {
    let app = setup_test_app().await;
    let uploaded: Value = upload(app.client(), create_test_pdf(), "report.pdf", "application/pdf")
        .await
        .json();
    std::fs::remove_file(app.upload_dir().join(uploaded["filepath"].as_str().unwrap())).unwrap();

    let response = app
        .client()
        .get(&api_path(&format!("/documents/download/{}", uploaded["id"])))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], "FILE_MISSING");
    assert_eq!(body["error"], "File not found on server");
}

#[tokio::test]
async fn test_delete_document() {
    let app = setup_test_app().await;
    let uploaded: Value = upload(app.client(), create_test_pdf(), "report.pdf", "application/pdf")
        .await
        .json();
    let id = uploaded["id"].as_i64().unwrap();

    let response = app
        .client()
        .delete(&api_path(&format!("/documents/{}", id)))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({ "message": "Document deleted successfully" })
    );
    assert!(app.stored_files().is_empty());

    let get = app
        .client()
        .get(&api_path(&format!("/documents/{}", id)))
        .await;
    assert_eq!(get.status_code(), 404);

    let download = app
        .client()
        .get(&api_path(&format!("/documents/download/{}", id)))
        .await;
    assert_eq!(download.status_code(), 404);
}

#[tokio::test]
async fn test_delete_document_not_found() {
    let app = setup_test_app().await;
    upload(app.client(), create_test_pdf(), "report.pdf", "application/pdf").await;

    let response = app.client().delete(&api_path("/documents/999")).await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(app.catalog.len(), 1);
    assert_eq!(app.stored_files().len(), 1);
}

#[tokio::test]
async fn test_uploaded_file_served_statically() {
    let app = setup_test_app().await;
    let pdf = create_test_pdf();
    let uploaded: Value = upload(app.client(), pdf.clone(), "report.pdf", "application/pdf")
        .await
        .json();

    let response = app
        .client()
        .get(&api_path(&format!(
            "/uploads/{}",
            uploaded["filepath"].as_str().unwrap()
        )))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), pdf.as_slice());
}

#[tokio::test]
async fn test_unconfigured_catalog_still_serves_health() {
    let (server, temp_dir) = setup_unconfigured_app().await;

    let health = server.get(&api_path("/health")).await;
    assert_eq!(health.status_code(), 200);

    let list = server.get(&api_path("/documents")).await;
    assert_eq!(list.status_code(), 500);
    let body: Value = list.json();
    assert_eq!(body["code"], "CATALOG_UNAVAILABLE");

    let uploaded = upload(&server, create_test_pdf(), "report.pdf", "application/pdf").await;
    assert_eq!(uploaded.status_code(), 500);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
