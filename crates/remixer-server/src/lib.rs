//! JSON API over the panel controller, plus the configuration that wires
//! it to real providers.

pub mod config;
pub mod error;
mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/panel", get(routes::panel::get_panel))
        .route("/api/actions", post(routes::panel::dispatch_action))
        .route(
            "/api/share/candidates/{id}",
            get(routes::share::share_candidate),
        )
        .route("/api/share/saved/{id}", get(routes::share::share_saved))
        .layer(axum_mw::from_fn(middleware::request_log))
        .layer(cors)
        .with_state(state)
}
