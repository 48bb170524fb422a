use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::models::{SeasonAverages, SeasonAveragesResponse};
use crate::routes::QueryParams;
use crate::state::AppState;

/// GET /season-averages?playerId=237&season=2023
///
/// `playerId` is the upstream player id, forwarded as given. `season` is the
/// season start year and falls back to the configured default.
///
/// Responds with `{"averages": null}` when upstream has no record for the
/// player and season. That is not treated as a failure.
pub async fn get_season_averages(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<SeasonAveragesResponse>, ApiError> {
    let player_id = params
        .get("playerId")
        .ok_or(ApiError::MissingParameter("Missing required playerId parameter"))?;

    let season = params.get("season").unwrap_or(state.default_season.as_str());

    let record = state
        .upstream
        .season_averages(season, player_id)
        .await
        .map_err(|e| {
            tracing::error!(
                player_id = %player_id,
                season = %season,
                details = %e.details(),
                "Error in /season-averages: {}",
                e
            );
            ApiError::upstream("Failed to fetch season averages", &e)
        })?;

    Ok(Json(SeasonAveragesResponse {
        averages: record.map(SeasonAverages::from),
    }))
}
