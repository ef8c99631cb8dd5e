//! HTTP surface of the portico host
//!
//! Serves the page shell and embedded assets, the assembled catalogue at
//! /config.json, and REST endpoints for app registration.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use portico_catalogue::Tile;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Settings;
use crate::embedded;
use crate::registry::{assemble_document, AppRegistry};

// Shared state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub registry: Arc<RwLock<AppRegistry>>,
}

impl AppState {
    /// State with the registry seeded from the settings' `[[apps]]` entries.
    pub fn new(settings: Settings) -> Self {
        let registry = AppRegistry::from_settings(&settings);
        Self {
            settings: Arc::new(settings),
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}

/// Full application router: page shell, assets, catalogue, REST API
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(serve_index))
        .route("/config.js", get(serve_boot_js)) // Serve dynamic render parameters
        .route("/config.json", get(serve_catalogue))
        .route("/*path", get(serve_static))
        .nest("/api", api_router())
        .with_state(state)
        .layer(cors)
}

// Routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/apps", get(list_apps).post(register_app))
        .route("/apps/:name", delete(deregister_app))
}

// Handlers

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn list_apps(State(state): State<AppState>) -> Json<serde_json::Value> {
    let apps = state.registry.read().await.tiles();
    Json(serde_json::json!({ "apps": apps }))
}

async fn register_app(State(state): State<AppState>, Json(tile): Json<Tile>) -> impl IntoResponse {
    let name = tile.get_str("name").unwrap_or_default().to_string();
    if state.registry.write().await.upsert(tile) {
        tracing::info!(name = %name, "Registered app");
        (
            StatusCode::OK,
            Json(serde_json::json!({ "name": name, "registered": true })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "app name is required" })),
        )
    }
}

async fn deregister_app(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    if state.registry.write().await.remove(&name).is_some() {
        tracing::info!(name = %name, "Deregistered app");
        (
            StatusCode::OK,
            Json(serde_json::json!({ "name": name, "deleted": true })),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "app not found" })),
        )
    }
}

/// Serve the assembled catalogue as /config.json
///
/// Assembled per request and marked no-store; the next page load always sees
/// the current registry.
async fn serve_catalogue(State(state): State<AppState>) -> Response<Body> {
    let registry = state.registry.read().await;
    let doc = assemble_document(&state.settings, &registry);
    drop(registry);

    match doc.to_json() {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CACHE_CONTROL, "no-store")
            .body(Body::from(body))
            .unwrap(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize catalogue");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from("catalogue serialization failed"))
                .unwrap()
        }
    }
}

/// Serve /config.js with the render parameters for the page shell
async fn serve_boot_js(State(state): State<AppState>) -> Response<Body> {
    let js = format!(
        "window.PORTICO = {{ columns: {} }};",
        state.settings.page.columns
    );
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/javascript")
        .body(Body::from(js))
        .unwrap()
}

/// Serve index.html at root
async fn serve_index() -> Response<Body> {
    match embedded::get_asset("index.html") {
        Some((data, mime)) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .body(Body::from(data))
            .unwrap(),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("index.html not found"))
            .unwrap(),
    }
}

/// Serve embedded static file; unknown paths are a plain 404
async fn serve_static(Path(path): Path<String>) -> Response<Body> {
    match embedded::get_asset(&path) {
        Some((data, mime)) => {
            // Use application/javascript for .js files (override detected mime)
            let content_type = if std::path::Path::new(&path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
            {
                "application/javascript"
            } else {
                mime
            };

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CACHE_CONTROL, "public, max-age=3600")
                .body(Body::from(data))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}
