use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::models::{PlayerSummary, PlayersResponse};
use crate::routes::QueryParams;
use crate::state::AppState;

// GET /players?search=lebron - Search upstream players by name
pub async fn search_players(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<PlayersResponse>, ApiError> {
    let search = params
        .get("search")
        .ok_or(ApiError::MissingParameter("Missing required query parameter: search"))?;

    let players = state.upstream.search_players(search).await.map_err(|e| {
        tracing::error!(search = %search, details = %e.details(), "Error in /players: {}", e);
        ApiError::upstream("Failed to fetch player data", &e)
    })?;

    Ok(Json(PlayersResponse {
        players: players.into_iter().map(PlayerSummary::from).collect(),
    }))
}
