//! End-to-end tests against a mocked ELN server.
//!
//! These exercise the same flows the CLI drives: status probe, document
//! creation, paginated listing and the experiment upload.

use std::fs;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eln_core::client::Error;
use eln_core::documents;
use eln_core::experiment::{self, FileStatus, UploadOptions};
use eln_integration_tests::{TEST_KEY, test_client};

fn doc_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "globalId": format!("SD{id}"),
        "name": name,
        "created": "2025-01-16T09:00:00.000Z"
    })
}

#[tokio::test]
async fn status_sends_the_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .and(header("apiKey", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "OK",
            "rspaceVersion": "2.5.0"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let status = client.server_status().await.unwrap();

    assert_eq!(status.message, "OK");
    assert_eq!(status.rspace_version.as_deref(), Some("2.5.0"));
}

#[tokio::test]
async fn rejected_credentials_map_to_the_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    match client.server_status().await {
        Err(Error::Auth { status }) => assert_eq!(status, 401),
        other => panic!("expected auth error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn server_failures_carry_the_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    match client.server_status().await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("expected api error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn listing_walks_every_page_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents"))
        .and(query_param("pageNumber", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalHits": 3,
            "documents": [doc_json(1, "Alpha"), doc_json(2, "Beta")]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents"))
        .and(query_param("pageNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalHits": 3,
            "documents": [doc_json(3, "Gamma")]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents"))
        .and(query_param("pageNumber", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalHits": 3,
            "documents": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let docs = documents::list_all(&client).await.unwrap();

    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn document_count_comes_from_total_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents"))
        .and(query_param("pageSize", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalHits": 812,
            "documents": [doc_json(1, "Alpha")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(documents::count(&client).await.unwrap(), 812);
}

#[tokio::test]
async fn creation_always_carries_the_api_tag() {
    let server = MockServer::start().await;

    // The mock only matches when the comma-joined tags include API, so a
    // missing tag surfaces as a 404 here.
    Mock::given(method("POST"))
        .and(path("/api/v1/documents"))
        .and(body_string_contains("\"tags\":\"sem,API\""))
        .and(body_string_contains("\"parentFolderId\":7"))
        .respond_with(ResponseTemplate::new(201).set_body_json(doc_json(42, "Run 42")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let doc = documents::create(
        &client,
        "Run 42",
        "<p>hello</p>".to_string(),
        vec!["sem".to_string()],
        Some(7),
    )
    .await
    .unwrap();

    assert_eq!(doc.id, 42);
    assert_eq!(doc.global_id.as_deref(), Some("SD42"));
}

#[tokio::test]
async fn experiment_upload_links_files_and_skips_oversized() {
    let server = MockServer::start().await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.md"), "# Findings\n\nAll good.").unwrap();
    fs::write(dir.path().join("trace.bin"), vec![0u8; 64]).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v1/files"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "globalId": "GL77",
            "name": "notes.md",
            "size": 23
        })))
        .mount(&server)
        .await;

    // The summary must reference the uploaded file and mention the one
    // that stayed local.
    Mock::given(method("POST"))
        .and(path("/api/v1/documents"))
        .and(body_string_contains("<fileId=77>"))
        .and(body_string_contains("trace.bin"))
        .respond_with(ResponseTemplate::new(201).set_body_json(doc_json(9, "experiment")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let opts = UploadOptions {
        // 64 bytes is over this limit, notes.md is under it.
        max_filesize_mb: 0.000_05,
        ..UploadOptions::default()
    };

    let report = experiment::upload_experiment(&client, dir.path(), &opts, None)
        .await
        .unwrap();

    assert_eq!(report.document.id, 9);
    assert_eq!(report.uploaded(), 1);
    assert_eq!(report.skipped(), 1);

    let statuses: Vec<&FileStatus> = report.files.iter().map(|f| &f.status).collect();
    assert!(matches!(statuses[0], FileStatus::Uploaded { file_id: 77 }));
    assert!(matches!(statuses[1], FileStatus::Oversized));
}

#[tokio::test]
async fn failed_uploads_do_not_abort_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/files"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gallery full"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/documents"))
        .and(body_string_contains("upload failed"))
        .respond_with(ResponseTemplate::new(201).set_body_json(doc_json(10, "experiment")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.md"), "# hi").unwrap();

    let client = test_client(&server.uri());
    let report = experiment::upload_experiment(&client, dir.path(), &UploadOptions::default(), None)
        .await
        .unwrap();

    assert_eq!(report.uploaded(), 0);
    assert!(matches!(report.files[0].status, FileStatus::Failed));
}
