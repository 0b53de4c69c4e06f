use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use todo_server::app_state::AppState;
use todo_server::data_access::task_store::TaskStore;
use todo_server::map_routes;
use todo_server::settings::Settings;

#[tokio::main]
async fn main() {
    init_tracing();

    let settings = Settings::load().expect("Failed to load settings");

    let store = TaskStore::open(&settings.database_path).expect("Failed to open task database");

    let state = Arc::new(AppState { store });

    let app = map_routes(state)
        // Anything outside /api is the frontend bundle.
        .fallback_service(
            ServeDir::new(&settings.static_dir).append_index_html_on_directories(true),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr: SocketAddr = format!(
        "{}:{}",
        settings.tcp_socket_binding, settings.tcp_socket_port
    )
    .parse()
    .expect("Invalid bind address");

    tracing::info!(%addr, db = %settings.database_path, "todo server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
