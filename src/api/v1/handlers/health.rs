/*
 * Responsibility
 * - GET /health, GET /api/v1/health (疎通用)
 * - API key middleware は通さない
 */
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
