//! Integration tests for the portico HTTP surface
//!
//! Each test binds the real router to an ephemeral port and drives it with a
//! plain HTTP client, the way a page load or a registering service would.

use portico_catalogue::Tile;
use portico_host::api::{self, AppState};
use portico_host::config::Settings;
use serde_json::json;

fn tile(fields: serde_json::Value) -> Tile {
    serde_json::from_value(fields).unwrap()
}

fn seeded_settings() -> Settings {
    let mut settings = Settings::default();
    settings.page.title = "Team portal".to_string();
    settings.page.tagline = "Everything in one place".to_string();
    settings.links = vec![
        tile(json!({"name": "Docs", "url": "https://docs.example.com"})),
        tile(json!({"name": "Status", "url": "https://status.example.com"})),
    ];
    settings.apps = vec![tile(json!({"name": "wiki", "url": "http://wiki:8000"}))];
    settings
}

/// Serve the full router on an ephemeral port, returning the base URL.
async fn spawn_host(settings: Settings) -> String {
    let state = AppState::new(settings);
    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let base = spawn_host(Settings::default()).await;

    let body: serde_json::Value = reqwest::get(format!("{base}/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

/// The page shell carries the template holder and the mount point.
#[tokio::test]
async fn page_shell_has_template_and_mount() {
    let base = spawn_host(Settings::default()).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("id=\"root-template\""));
    assert!(html.contains("id=\"root\""));
}

/// The assembled catalogue carries page metadata, settings links and seeded
/// apps, with no padding applied server-side.
#[tokio::test]
async fn catalogue_serves_unpadded_document() {
    let base = spawn_host(seeded_settings()).await;

    let resp = reqwest::get(format!("{base}/config.json")).await.unwrap();
    assert_eq!(resp.headers()["cache-control"], "no-store");
    let doc: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(doc["title"], "Team portal");
    assert_eq!(doc["tagline"], "Everything in one place");
    assert_eq!(doc["links"].as_array().unwrap().len(), 2);
    // One seeded app, not padded out to a full grid row
    assert_eq!(doc["apps"].as_array().unwrap().len(), 1);
    assert_eq!(doc["apps"][0]["name"], "wiki");
}

/// Registering over the API shows up in the next catalogue fetch, in name
/// order.
#[tokio::test]
async fn registration_appears_in_catalogue() {
    let base = spawn_host(seeded_settings()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/apps"))
        .json(&json!({"name": "grafana", "url": "http://grafana:3000"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let doc: serde_json::Value = reqwest::get(format!("{base}/config.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = doc["apps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["grafana", "wiki"]);
}

/// Registering the same name again replaces the earlier tile.
#[tokio::test]
async fn registration_upserts_by_name() {
    let base = spawn_host(Settings::default()).await;
    let client = reqwest::Client::new();

    for url in ["http://old:3000", "http://new:3000"] {
        let resp = client
            .post(format!("{base}/api/apps"))
            .json(&json!({"name": "grafana", "url": url}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let body: serde_json::Value = client
        .get(format!("{base}/api/apps"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let apps = body["apps"].as_array().unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0]["url"], "http://new:3000");
}

/// A registration without a name is a 400 and leaves the registry alone.
#[tokio::test]
async fn nameless_registration_rejected() {
    let base = spawn_host(Settings::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/apps"))
        .json(&json!({"url": "http://nameless"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = client
        .get(format!("{base}/api/apps"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["apps"].as_array().unwrap().is_empty());
}

/// Deregistering removes the tile; unknown names are a 404.
#[tokio::test]
async fn deregistration_removes_app() {
    let base = spawn_host(seeded_settings()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/api/apps/wiki"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .delete(format!("{base}/api/apps/wiki"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let doc: serde_json::Value = reqwest::get(format!("{base}/config.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(doc["apps"].as_array().unwrap().is_empty());
}

/// /config.js hands the page shell the configured column count.
#[tokio::test]
async fn boot_js_carries_columns() {
    let mut settings = Settings::default();
    settings.page.columns = 4;
    let base = spawn_host(settings).await;

    let resp = reqwest::get(format!("{base}/config.js")).await.unwrap();
    assert_eq!(resp.headers()["content-type"], "application/javascript");
    let js = resp.text().await.unwrap();
    assert_eq!(js, "window.PORTICO = { columns: 4 };");
}

/// Unknown asset paths are a plain 404, not an index fallback.
#[tokio::test]
async fn unknown_asset_is_404() {
    let base = spawn_host(Settings::default()).await;

    let resp = reqwest::get(format!("{base}/no-such-file.png")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
