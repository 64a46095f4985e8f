//! Entry point for the task management web server
//!
//! Serves the server-rendered task UI on port 8080.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use web_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The tasks document path is the only configuration.
    let tasks_file = std::env::var("TASKS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("task-lists.json"));

    tracing::info!("Using tasks file: {:?}", tasks_file);

    let state = AppState::new(tasks_file);
    let app = web_server::app(state).layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
