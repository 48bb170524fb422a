use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::Config;
pub use state::AppState;
pub use upstream::BallDontLieClient;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    // CORS: any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::health_check))
        .route("/players", get(routes::players::search_players))
        .route("/season-averages", get(routes::season_averages::get_season_averages))
        .fallback(routes::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
