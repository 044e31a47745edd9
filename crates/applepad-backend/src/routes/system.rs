use applepad_core::protocol::HealthResponse;
use axum::Json;

pub async fn root() -> &'static str {
    "ApplePad image backend"
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
