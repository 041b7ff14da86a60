#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use tpx_api::config::ServerConfig;
use tpx_api::engine::updater::UpdaterConfig;
use tpx_api::routes;
use tpx_api::state::AppState;
use tpx_core::instrument::InstrumentRegistry;
use tpx_core::store::{StatusStore, StoreError};
use tpx_core::update::{RecordKey, StatusTarget, StatusUpdate};

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// Store that records every update and keeps the last write per field set.
#[derive(Default)]
pub struct MemoryStore {
    applied: Mutex<Vec<StatusUpdate>>,
    rows: Mutex<HashMap<(RecordKey, StatusTarget), StatusUpdate>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every update applied, in order.
    pub fn applied(&self) -> Vec<StatusUpdate> {
        self.applied.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }

    /// Number of distinct (key, field set) entries written.
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Final state of one field set.
    pub fn current(&self, key: RecordKey, target: StatusTarget) -> Option<StatusUpdate> {
        self.rows.lock().unwrap().get(&(key, target)).cloned()
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn apply(&self, update: &StatusUpdate) -> Result<u64, StoreError> {
        self.applied.lock().unwrap().push(update.clone());
        self.rows
            .lock()
            .unwrap()
            .insert((update.key, update.target), update.clone());
        Ok(1)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store whose every call fails, counting the attempts.
#[derive(Default)]
pub struct FailingStore {
    calls: Mutex<usize>,
}

impl FailingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl StatusStore for FailingStore {
    async fn apply(&self, _update: &StatusUpdate) -> Result<u64, StoreError> {
        *self.calls.lock().unwrap() += 1;
        Err(StoreError::Query(
            "relation \"koatpx\" does not exist (password=hunter2)".to_string(),
        ))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 1,
        instruments: InstrumentRegistry::all(),
        updater: UpdaterConfig::default(),
    }
}

/// Build the full application router with all middleware layers over the
/// given store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(store: Arc<dyn StatusStore>) -> Router {
    build_test_app_with(test_config(), store)
}

pub fn build_test_app_with(config: ServerConfig, store: Arc<dyn StatusStore>) -> Router {
    let state = AppState::new(config, store);

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::tpx_status::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri).await
}

/// `/tpx_status` URI for the given parameters.
pub fn status_uri(instr: &str, date: &str, status_type: &str, status: &str) -> String {
    format!("/tpx_status?instr={instr}&date={date}&statusType={status_type}&status={status}")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
