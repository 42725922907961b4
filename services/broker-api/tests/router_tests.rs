//! Router-level tests driving the full HTTP surface.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration as ChronoDuration, SecondsFormat, Utc};
use landsat_catalog::{FileCatalogSource, SceneCatalog};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use broker_api::build_router;
use broker_api::state::AppState;
use test_utils::fixtures::{scene_ids, scene_list};
use test_utils::{scene_list_file, scene_list_gz};
use tides::TideClient;

// ============================================================================
// Helpers
// ============================================================================

struct TestApp {
    router: Router,
    catalog: Arc<SceneCatalog>,
    _scene_list: NamedTempFile,
}

fn test_app(tide_url: &str) -> TestApp {
    let scene_list = scene_list_file(&scene_list_gz(&[
        scene_list::HEADER,
        scene_list::SAMPLE_ROW,
        scene_list::SECOND_ROW,
    ]));
    let catalog = Arc::new(SceneCatalog::new(Arc::new(FileCatalogSource::new(
        scene_list.path(),
    ))));
    let tides = TideClient::new(Some(tide_url), Duration::from_secs(5)).unwrap();
    let state = Arc::new(AppState::new(Arc::clone(&catalog), tides));

    TestApp {
        router: build_router(state),
        catalog,
        _scene_list: scene_list,
    }
}

async fn ready_app() -> TestApp {
    let app = test_app("http://127.0.0.1:9/tides");
    tokio_test::assert_ok!(app.catalog.refresh().await);
    app
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn days_ago(days: i64) -> String {
    (Utc::now() - ChronoDuration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============================================================================
// Health and catalog
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = test_app("http://127.0.0.1:9/tides");
    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_follows_catalog() {
    let app = test_app("http://127.0.0.1:9/tides");

    let (status, body) = get(&app.router, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);

    app.catalog.refresh().await.unwrap();

    let (status, body) = get(&app.router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"], 2);
}

#[tokio::test]
async fn test_catalog_status() {
    let app = ready_app().await;
    let (status, body) = get(&app.router, "/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["entries"], 2);
    assert_eq!(body["refreshesSucceeded"], 1);
    assert!(body["refreshedAt"].is_string());
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = ready_app().await;
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Resolution
// ============================================================================

#[tokio::test]
async fn test_resolve_legacy_scene() {
    let app = ready_app().await;
    let (status, body) = get(&app.router, &format!("/scenes/{}", scene_ids::LEGACY_LANDSAT)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["convention"], "LegacyLandsat");
    assert_eq!(body["bands"].as_object().unwrap().len(), 11);
    assert!(body["bands"]["red"]
        .as_str()
        .unwrap()
        .ends_with("/006/052/LC80060522017107LGN00/LC80060522017107LGN00_B4.TIF"));
}

#[tokio::test]
async fn test_resolve_collection_one_scene() {
    let app = ready_app().await;
    let (status, body) = get(&app.router, &format!("/scenes/{}", scene_ids::COLLECTION_ONE)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["convention"], "CollectionOneLandsat");
    assert_eq!(
        body["bands"]["blue"],
        format!("{}{}_B2.TIF", scene_list::SAMPLE_FOLDER, scene_list::SAMPLE_PREFIX)
    );
}

#[tokio::test]
async fn test_resolve_before_catalog_ready() {
    let app = test_app("http://127.0.0.1:9/tides");

    let (status, body) = get(&app.router, &format!("/scenes/{}", scene_ids::COLLECTION_ONE)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "CatalogNotReady");

    // Self-describing IDs do not need the catalog
    let (status, _) = get(&app.router, &format!("/scenes/{}", scene_ids::SENTINEL_2)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_resolve_errors() {
    let app = ready_app().await;

    let (status, body) =
        get(&app.router, &format!("/scenes/{}", scene_ids::MISSING_COLLECTION_ONE)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SceneNotFound");

    let (status, body) = get(&app.router, &format!("/scenes/{}", scene_ids::UNRECOGNIZED)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "InvalidIdentifier");

    let (status, body) =
        get(&app.router, &format!("/scenes/{}", scene_ids::MALFORMED_LEGACY_LANDSAT)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MalformedIdentifier");

    let (status, body) = get(
        &app.router,
        &format!("/scenes/{}?dataType=L2SP", scene_ids::LEGACY_LANDSAT),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UnknownDataType");
}

#[tokio::test]
async fn test_scene_folder() {
    let app = ready_app().await;
    let (status, body) = get(
        &app.router,
        &format!("/scenes/{}/folder", scene_ids::COLLECTION_ONE),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sceneId"], scene_ids::COLLECTION_ONE);
    assert_eq!(body["folderUrl"], scene_list::SAMPLE_FOLDER);
}

// ============================================================================
// Best scene
// ============================================================================

#[tokio::test]
async fn test_best_scene_prefers_clear_sky() {
    let app = ready_app().await;
    let acquired = days_ago(3);
    let body = json!({
        "scenes": [
            {"sceneId": "cloudy", "cloudCover": 50.0, "acquiredDate": acquired},
            {"sceneId": "clear", "cloudCover": 5.0, "acquiredDate": acquired},
            {"sceneId": "overcast", "cloudCover": 90.0, "acquiredDate": acquired}
        ]
    });

    let (status, body) = post_json(&app.router, "/scenes/best", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bestSceneId"], "clear");

    let ranked = body["ranked"].as_array().unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0]["sceneId"], "clear");
    assert_eq!(ranked[2]["sceneId"], "overcast");
    assert!(ranked[0]["score"].as_f64().unwrap() > ranked[1]["score"].as_f64().unwrap());
}

#[tokio::test]
async fn test_best_scene_requires_candidates() {
    let app = ready_app().await;
    let (status, body) = post_json(&app.router, "/scenes/best", json!({"scenes": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MissingParameterValue");
}

#[tokio::test]
async fn test_best_scene_with_tides() {
    let acquired = days_ago(2);
    let dtg = chrono::DateTime::parse_from_rfc3339(&acquired)
        .unwrap()
        .format("%Y-%m-%d-%H-%M")
        .to_string();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tides")
        .with_status(200)
        .with_body(
            json!({"locations": [
                {"lat": 42.0, "lon": -70.0, "dtg": dtg,
                 "results": {"minimumTide24Hours": 0.0, "maximumTide24Hours": 2.0, "currentTide": 0.0}},
                {"lat": 12.0, "lon": 10.0, "dtg": dtg,
                 "results": {"minimumTide24Hours": 0.0, "maximumTide24Hours": 2.0, "currentTide": 2.0}}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let app = test_app(&format!("{}/tides", server.url()));
    let body = json!({
        "tides": true,
        "scenes": [
            {"sceneId": "low-tide", "cloudCover": 10.0, "acquiredDate": acquired, "bbox": [-71.0, 41.0, -69.0, 43.0]},
            {"sceneId": "high-tide", "cloudCover": 10.0, "acquiredDate": acquired, "bbox": [9.0, 11.0, 11.0, 13.0]}
        ]
    });

    let (status, body) = post_json(&app.router, "/scenes/best", body).await;
    mock.assert_async().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bestSceneId"], "high-tide");
    assert_eq!(body["ranked"][0]["currentTide"], 2.0);
    assert_eq!(body["ranked"][1]["maximumTide24Hours"], 2.0);
}

#[tokio::test]
async fn test_best_scene_tide_failure_is_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/tides")
        .with_status(500)
        .create_async()
        .await;

    let app = test_app(&format!("{}/tides", server.url()));
    let body = json!({
        "tides": true,
        "scenes": [
            {"sceneId": "a", "cloudCover": 10.0, "acquiredDate": days_ago(1), "bbox": [-71.0, 41.0, -69.0, 43.0]}
        ]
    });

    let (status, body) = post_json(&app.router, "/scenes/best", body).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "TideServiceFailed");
}
