use crate::upstream::BallDontLieClient;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub upstream: BallDontLieClient,
    /// Season used by `/season-averages` when the caller gives none.
    pub default_season: String,
}
