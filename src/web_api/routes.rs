pub mod health_routes;
pub mod task_routes;

use axum::Router;

use crate::app_state::SharedState;

pub fn map_routes(state: SharedState) -> Router {
    Router::new()
        .merge(task_routes::get_router(state))
        .merge(health_routes::get_router())
}
