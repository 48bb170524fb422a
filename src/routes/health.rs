use axum::response::Json;

use crate::models::HealthResponse;

pub const SERVICE_NAME: &str = "theplayerindex-nba-api";

// GET / - Health check, independent of upstream and credentials
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
