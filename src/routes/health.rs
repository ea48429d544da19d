use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, response::ApiResponse, state::AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
        (status = 500, description = "Database unreachable"),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HealthData>>> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;

    let data = HealthData {
        status: "ok".to_string(),
    };

    Ok(Json(ApiResponse::success("Health check", data)))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness banner", body = String, content_type = "text/plain"),
    ),
    tag = "Health"
)]
pub async fn root() -> &'static str {
    "API online!\n"
}
