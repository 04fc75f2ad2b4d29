use axum::Json;
use serde::Serialize;

/// Fixed greeting; must stay identical across calls and restarts.
const GREETING: &str = "Calculadora Pro API running 💜";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: GREETING,
    })
}
