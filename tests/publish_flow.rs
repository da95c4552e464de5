//! Integration tests for the publish orchestrator.
//!
//! The batch modes run against directory fixtures built with `assert_fs`,
//! with a `MockCatalog` standing in for GeoServer. One end-to-end test
//! drives the real REST client against wiremock to pin the worked example
//! from the README (workspace SIGALERTA, file mapbiomas_2020_tiled.tif).

use std::path::Path;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use wiremock::matchers::{method, path as url_path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geopub::core::config::Config;
use geopub::core::types::PublishStep;
use geopub::geoserver::mock::{MockCatalog, MockOperation};
use geopub::geoserver::GeoServerRest;
use geopub::publish::Publisher;
use geopub::ui::Verbosity;

fn raster_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    dir.child("mapbiomas_2019_tiled.tif").touch().unwrap();
    dir.child("mapbiomas_2020_tiled.tif").touch().unwrap();
    dir.child("nested/elevation.tiff").touch().unwrap();
    dir.child("nested/notes.txt").touch().unwrap();
    dir.child("styles/legend.sld").touch().unwrap();
    dir
}

// =============================================================================
// Batch selection
// =============================================================================

#[tokio::test]
async fn publish_all_selects_every_raster_recursively() {
    let dir = raster_tree();
    let catalog = MockCatalog::new();
    let publisher = Publisher::new(&catalog, Verbosity::Quiet);

    let batch = publisher.publish_all(dir.path()).await.unwrap();

    let mut stores: Vec<_> = batch.files.iter().map(|f| f.store.as_str()).collect();
    stores.sort_unstable();
    assert_eq!(
        stores,
        vec!["elevation", "mapbiomas_2019_tiled", "mapbiomas_2020_tiled"]
    );
}

#[tokio::test]
async fn filtered_files_are_a_strict_subset_of_the_full_batch() {
    let dir = raster_tree();

    let all_catalog = MockCatalog::new();
    let all = Publisher::new(&all_catalog, Verbosity::Quiet)
        .publish_all(dir.path())
        .await
        .unwrap();

    let filtered_catalog = MockCatalog::new();
    let filtered = Publisher::new(&filtered_catalog, Verbosity::Quiet)
        .publish_filtered(dir.path(), "mapbiomas")
        .await
        .unwrap();

    assert!(filtered.files.len() < all.files.len());
    let all_paths: Vec<_> = all.files.iter().map(|f| &f.path).collect();
    for file in &filtered.files {
        assert!(all_paths.contains(&&file.path));
    }
}

#[tokio::test]
async fn empty_directory_completes_without_catalog_calls() {
    let dir = TempDir::new().unwrap();
    let catalog = MockCatalog::new();
    let publisher = Publisher::new(&catalog, Verbosity::Quiet);

    let all = publisher.publish_all(dir.path()).await.unwrap();
    let filtered = publisher.publish_filtered(dir.path(), ".*").await.unwrap();

    assert!(all.is_empty());
    assert!(filtered.is_empty());
    assert_eq!(catalog.call_count(), 0);
}

// =============================================================================
// Failure semantics
// =============================================================================

#[tokio::test]
async fn a_rejected_file_does_not_abort_the_batch() {
    let dir = raster_tree();
    let catalog = MockCatalog::new();
    // Every layer publication is rejected; stores and styles still go through.
    catalog.reject(PublishStep::PublishLayer, 500, "internal error");
    let publisher = Publisher::new(&catalog, Verbosity::Quiet);

    let batch = publisher.publish_all(dir.path()).await.unwrap();

    assert_eq!(batch.files.len(), 3);
    assert_eq!(batch.succeeded(), 0);
    assert_eq!(batch.failed(), 3);
    // All three steps were still attempted for every file.
    assert_eq!(catalog.call_count(), 9);
}

// =============================================================================
// Worked example, end to end against wiremock
// =============================================================================

#[tokio::test]
async fn worked_example_issues_three_sequential_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(url_path("/workspaces/SIGALERTA/coveragestores"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(url_path(
            "/workspaces/SIGALERTA/coveragestores/mapbiomas_2020_tiled/coverages",
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(url_path("/layers/SIGALERTA:mapbiomas_2020"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        base_url: format!("{}/", server.uri()),
        username: "a".to_string(),
        password: "b".to_string(),
        workspace_name: "SIGALERTA".to_string(),
    };
    let catalog = GeoServerRest::new(&config);
    let publisher = Publisher::new(&catalog, Verbosity::Quiet);

    let report = publisher
        .publish_one(Path::new("mapbiomas_2020_tiled.tif"))
        .await
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.store, "mapbiomas_2020_tiled");
    assert_eq!(report.layer, "mapbiomas_2020");

    // The style body must reference the workspace-qualified legend style.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let style_body: serde_json::Value = serde_json::from_slice(&requests[2].body).unwrap();
    assert_eq!(
        style_body["layer"]["defaultStyle"]["name"],
        "SIGALERTA:mapbiomas_legend"
    );
}

// =============================================================================
// Operation sequencing
// =============================================================================

#[tokio::test]
async fn each_file_gets_its_own_three_step_sequence() {
    let dir = TempDir::new().unwrap();
    dir.child("a_tiled.tif").touch().unwrap();
    dir.child("b_tiled.tif").touch().unwrap();

    let catalog = MockCatalog::new();
    let publisher = Publisher::new(&catalog, Verbosity::Quiet);
    publisher.publish_all(dir.path()).await.unwrap();

    let ops = catalog.operations();
    assert_eq!(ops.len(), 6);
    for chunk in ops.chunks(3) {
        assert!(matches!(chunk[0], MockOperation::CreateStore { .. }));
        assert!(matches!(chunk[1], MockOperation::PublishLayer { .. }));
        assert!(matches!(chunk[2], MockOperation::SetDefaultStyle { .. }));
    }
}
