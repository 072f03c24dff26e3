// 🌐 Menu Roulette - REST API with Axum
// The menu table is loaded before binding and shared read-only across handlers

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::NoCandidates;
use crate::loader::load_menus;
use crate::menu::MenuItem;
use crate::roulette::{filter_items, spin, MenuQuery};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    menus: Arc<Vec<MenuItem>>,
}

impl AppState {
    pub fn new(menus: Vec<MenuItem>) -> Self {
        Self {
            menus: Arc::new(menus),
        }
    }

    pub fn menus(&self) -> &[MenuItem] {
        &self.menus
    }
}

// ============================================================================
// Responses & Errors
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct MenuListResponse {
    count: usize,
    items: Vec<MenuItem>,
}

#[derive(Serialize)]
struct SpinResponse {
    winner: MenuItem,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("조건에 맞는 후보가 없습니다.")]
    NoCandidates(#[from] NoCandidates),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NoCandidates(_) => StatusCode::NOT_FOUND,
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET / and GET /api/health - Liveness check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        message: "Menu Roulette API running",
    })
}

/// GET /api/menus?category=&meal= - List matching menus
async fn list_menus(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Json<MenuListResponse>, AppError> {
    let Query(query) = query?;

    let items: Vec<MenuItem> = filter_items(state.menus(), &query)
        .into_iter()
        .cloned()
        .collect();
    debug!("GET /api/menus {:?} -> {} items", query, items.len());

    Ok(Json(MenuListResponse {
        count: items.len(),
        items,
    }))
}

/// POST /api/spin - Pick one random menu among the matching ones
async fn spin_once(
    State(state): State<AppState>,
    payload: Result<Json<MenuQuery>, JsonRejection>,
) -> Result<Json<SpinResponse>, AppError> {
    let Json(query) = payload?;

    let winner = spin(state.menus(), &query, &mut rand::rng())
        .map_err(|e| {
            info!("No candidates for {:?}", query);
            e
        })?
        .clone();
    debug!("POST /api/spin {:?} -> {:?}", query, winner.name);

    Ok(Json(SpinResponse { winner }))
}

// ============================================================================
// Router & Server
// ============================================================================

/// Build the full application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/menus", get(list_menus))
        .route("/spin", post(spin_once))
        .with_state(state);

    Router::new()
        .route("/", get(health_check))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}

/// Load the menu table, bind, and serve until Ctrl-C
pub async fn start_server(config: Config) -> Result<()> {
    info!("Loading menus from {:?}", config.csv_path);
    let menus = load_menus(&config.csv_path)
        .with_context(|| format!("Failed to load menus from {:?}", config.csv_path))?;

    if menus.is_empty() {
        warn!("Menu table is empty, every spin will return 404");
    }

    let app = router(AppState::new(menus), &config.static_dir);

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;

    info!("Server running on http://{address}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let menus = vec![
            MenuItem::new("Kimchi Jjigae")
                .with_id(1)
                .with_category("한식")
                .with_meal_times(["점심"]),
            MenuItem::new("Sushi")
                .with_id(2)
                .with_category("일식")
                .with_meal_times(["저녁"]),
        ];
        router(AppState::new(menus), Path::new("static"))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn spin_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/spin")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_and_root() {
        for uri in ["/", "/api/health"] {
            let (status, body) = send(get_request(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["ok"], json!(true));
        }
    }

    #[tokio::test]
    async fn test_list_all_menus() {
        let (status, body) = send(get_request("/api/menus")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(2));
        assert_eq!(body["items"][0]["name"], json!("Kimchi Jjigae"));
        assert_eq!(body["items"][1]["meal_times"], json!(["저녁"]));
    }

    #[tokio::test]
    async fn test_list_menus_with_filters() {
        // category=한식
        let (_, body) = send(get_request("/api/menus?category=%ED%95%9C%EC%8B%9D")).await;
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["items"][0]["id"], json!(1));

        let (_, body) = send(get_request("/api/menus?meal=dinner")).await;
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["items"][0]["id"], json!(2));

        // Empty parameters mean no constraint
        let (_, body) = send(get_request("/api/menus?category=&meal=")).await;
        assert_eq!(body["count"], json!(2));
    }

    #[tokio::test]
    async fn test_list_menus_without_match_is_empty_not_404() {
        // category=중식
        let (status, body) = send(get_request("/api/menus?category=%EC%A4%91%EC%8B%9D")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "count": 0, "items": [] }));
    }

    #[tokio::test]
    async fn test_spin_returns_matching_winner() {
        let (status, body) = send(spin_request(r#"{"category":"한식","meal":"lunch"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winner"]["id"], json!(1));
        assert_eq!(body["winner"]["category"], json!("한식"));
    }

    #[tokio::test]
    async fn test_spin_without_constraints() {
        let (status, body) = send(spin_request(r#"{"category":null,"meal":null}"#)).await;

        assert_eq!(status, StatusCode::OK);
        let id = body["winner"]["id"].as_i64().unwrap();
        assert!(id == 1 || id == 2);
    }

    #[tokio::test]
    async fn test_spin_without_match_is_404() {
        let (status, body) = send(spin_request(r#"{"category":"중식"}"#)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], json!("조건에 맞는 후보가 없습니다."));
    }

    #[tokio::test]
    async fn test_spin_malformed_body_is_400() {
        let (status, body) = send(spin_request("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().starts_with("Malformed payload"));
    }
}
