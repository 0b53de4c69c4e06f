use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> Json<HealthResponse> {
        Json(HealthResponse { status: "ok" })
    }
}
