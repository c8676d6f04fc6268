//! Health and version endpoints

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{api_success, ApiResponse, ApiResult};
use crate::server::PinPeopleServer;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Liveness check that also pings the database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_check(
    State(server): State<PinPeopleServer>,
) -> ApiResult<Json<ApiResponse<HealthStatus>>> {
    sqlx::query("SELECT 1").execute(&server.db_pool).await?;
    Ok(Json(api_success(HealthStatus {
        status: "ok",
        database: "reachable",
    })))
}

#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses((status = 200, description = "Build information"))
)]
pub async fn version() -> Json<ApiResponse<VersionInfo>> {
    Json(api_success(VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
