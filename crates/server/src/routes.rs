use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;

pub mod auth;
pub mod heroes;

pub use auth::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Everything outside the route table is a JSON not-found. Also registered
/// as the method fallback on each route, so an unsupported method on a known
/// path gets the same response instead of a bare 405.
async fn fallback() -> ApiError {
    ApiError::not_found()
}

/// Build the full application router: hero CRUD, token issuance, health.
///
/// The collection routes are registered with and without a trailing slash;
/// item routes carry the id as a path parameter and enforce the numeric-id
/// constraint inside the handlers.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let hero_routes = Router::new()
        .route(
            "/heros",
            get(heroes::list_heroes)
                .post(heroes::create_hero)
                .put(heroes::update_hero)
                .fallback(fallback),
        )
        .route(
            "/heros/",
            get(heroes::list_heroes)
                .post(heroes::create_hero)
                .put(heroes::update_hero)
                .fallback(fallback),
        )
        .route(
            "/heros/:id",
            get(heroes::get_hero)
                .delete(heroes::delete_hero)
                .fallback(fallback),
        );

    let auth_routes = Router::new()
        .route("/auth", post(auth::issue_token).fallback(fallback))
        .route("/auth/", post(auth::issue_token).fallback(fallback));

    Router::new()
        .route("/health", get(health))
        .merge(hero_routes)
        .merge(auth_routes)
        .fallback(fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
