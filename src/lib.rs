pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod facts;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::service::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub service: MovieService,
}

/// Build the application router. Shared between `main` and the integration
/// tests so both exercise the same routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(routes::list_all).post(routes::create))
        .route(
            "/movies/{id}",
            get(routes::get_by_id).put(routes::update).delete(routes::remove),
        )
        .route("/movies/year/{year}", get(routes::list_by_year))
        .route("/movies/genre/{genre}", get(routes::list_by_genre))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
