use axum::routing::get;
use axum::Router;

use crate::health_controller::HealthController;

pub const ROUTER_PATH: &str = "/api/health";

pub fn get_router() -> Router {
    Router::new().route(
        format!("{}/check_status", ROUTER_PATH).as_str(),
        get(HealthController::get),
    )
}
