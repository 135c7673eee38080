pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod round_store;
pub mod state;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let state = AppState::new(config);

    let api_routes = Router::new()
        .route("/scorecard", post(api::post_scorecard))
        .route("/rounds", post(api::create_round).get(api::list_rounds))
        .route("/rounds/import", post(api::import_round))
        .route(
            "/rounds/{id}",
            get(api::get_round).delete(api::delete_round),
        )
        .route("/rounds/{id}/export", get(api::export_round))
        .route("/rounds/{id}/holes/{hole}", put(api::set_hole_result))
        .route("/rounds/{id}/finish", post(api::finish_round));

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}
