use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use models::{metric::Metric, post::Post, process::ProcessStep, service::Service};

use crate::errors::JsonApiError;
use crate::observability::encode_metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod auth;
pub mod contact;
pub mod content;
pub mod hero;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], encode_metrics())
}

async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api") {
        return JsonApiError::not_found("Endpoint not found").into_response();
    }
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Build the full application router: content CRUD, hero, login, contact, docs and metrics
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // 列表型集合共用一套 CRUD 处理器
    let api = Router::new()
        .merge(content::routes::<Post, AppState>(state.collection()))
        .merge(content::routes::<Service, AppState>(state.collection()))
        .merge(content::routes::<Metric, AppState>(state.collection()))
        .merge(content::routes::<ProcessStep, AppState>(state.collection()))
        .route("/api/hero", get(hero::get).put(hero::replace))
        .route("/api/login", post(auth::login))
        .route("/api/contact", post(contact::submit))
        .merge(contact::inbox_routes::<AppState>(&state.contact))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
