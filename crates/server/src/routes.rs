pub mod singers;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub const GREETING: &str = "Hello, World!";

#[utoipa::path(
    get, path = "/", tag = "health",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
pub async fn hello() -> &'static str {
    GREETING
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: greeting, health, singer CRUD, OpenAPI document
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let singer_routes = Router::new()
        .route("/add", post(singers::add))
        .route("/get-singer", get(singers::get_singer))
        .route("/update-first-name", put(singers::update_first_name))
        .route("/delete-singer", delete(singers::delete_singer));

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(singer_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, method and path included
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
