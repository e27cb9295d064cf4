use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{ConnectInfo, Path as AxumPath, Query, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::core::response::format_timestamp;
use crate::core::{
    ConfigRegistry, EmotionResolver, ErrorPayload, ResponseComposer, SelectionLog,
    SelectionResponse, SelectionStats, WellnessError,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
const FORWARDED_FOR: &str = "x-forwarded-for";
const UNKNOWN_CLIENT: &str = "unknown";

/// Everything a request handler needs, injected through router state
pub struct AppContext {
    pub config: Config,
    pub resolver: EmotionResolver,
    pub composer: ResponseComposer,
    pub selections: SelectionLog,
}

impl AppContext {
    pub fn new(registry: Arc<ConfigRegistry>, config: Config) -> Self {
        Self {
            config,
            resolver: EmotionResolver::new(Arc::clone(&registry)),
            composer: ResponseComposer::new(registry),
            selections: SelectionLog::new(),
        }
    }
}

pub type AppState = Arc<AppContext>;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub show: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectEmotionRequest {
    #[serde(default)]
    pub emotion: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Error converted to the wire `{error, message}` shape at the HTTP boundary
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    payload: ErrorPayload,
}

impl ApiError {
    fn invalid_emotion() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            payload: ErrorPayload::invalid_emotion(),
        }
    }

    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: ErrorPayload::internal(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            payload: ErrorPayload {
                error: "not_found".to_string(),
                message: "Recurso no encontrado".to_string(),
            },
        }
    }
}

impl From<WellnessError> for ApiError {
    fn from(err: WellnessError) -> Self {
        match err {
            WellnessError::InvalidEmotion(raw) => {
                warn!(input = %raw, "rejected invalid emotion");
                ApiError::invalid_emotion()
            }
            other => {
                error!("request failed: {other}");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.payload)).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/select/:emotion", get(select_page_handler))
        .route("/select_emotion", post(select_emotion_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler));

    if let Some(static_dir) = state.config.static_dir.as_ref() {
        router = router
            .route_service("/styles.css", ServeFile::new(static_dir.join("styles.css")))
            .route_service("/script.js", ServeFile::new(static_dir.join("script.js")));
    }

    router
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

pub async fn serve(config: Config) -> Result<()> {
    let registry = Arc::new(ConfigRegistry::load().context("Built-in configuration is invalid")?);
    let address = config.bind_address();
    let state: AppState = Arc::new(AppContext::new(registry, config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;
    info!("listening on http://{address}");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
}

/// First `X-Forwarded-For` entry, then the peer address
fn client_address(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> String {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match (forwarded, peer) {
        (Some(address), _) => address.to_string(),
        (None, Some(ConnectInfo(addr))) => addr.ip().to_string(),
        (None, None) => UNKNOWN_CLIENT.to_string(),
    }
}

async fn index_handler(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Response {
    let show_welcome = query.show.as_deref().unwrap_or("welcome") == "welcome";
    Json(state.composer.landing(show_welcome)).into_response()
}

async fn select_page_handler(
    State(state): State<AppState>,
    AxumPath(emotion): AxumPath<String>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Response {
    let resolved = match state.resolver.resolve(&emotion) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!("{e}");
            let page = state.composer.invalid_emotion_page(&emotion);
            return (StatusCode::NOT_FOUND, Json(page)).into_response();
        }
    };

    let record = state
        .selections
        .append(resolved.emotion, client_address(&headers, peer.as_ref()));
    info!(emotion = %record.emotion, client = %record.client_address, "exercise page selected");

    Json(state.composer.compose_page(resolved)).into_response()
}

async fn select_emotion_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Result<Json<SelectionResponse>, ApiError> {
    let request: SelectEmotionRequest =
        serde_json::from_slice(&body).map_err(WellnessError::from)?;
    let resolved = state.resolver.resolve(&request.emotion)?;

    let record = state
        .selections
        .append(resolved.emotion, client_address(&headers, peer.as_ref()));
    info!(emotion = %record.emotion, client = %record.client_address, "emotion selected");

    Ok(Json(state.composer.compose_api(resolved.emotion, &record)))
}

async fn stats_handler(State(state): State<AppState>) -> Json<SelectionStats> {
    Json(state.selections.stats_with_limit(state.config.recent_limit))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: format_timestamp(&Utc::now()),
        version: VERSION.to_string(),
    })
}

async fn not_found_handler() -> ApiError {
    ApiError::not_found()
}
