//! HTTP surface for the checkpoint store
//!
//! | Operation | Method & Path        |
//! |-----------|----------------------|
//! | list      | GET /checkpoints     |
//! | getOne    | GET /checkpoints/:id |
//! | create    | POST /checkpoints    |
//! | clear     | DELETE /checkpoints  |
//! | restore   | POST /restore/:id    |
//! | publish   | PUT /publish         |
//! | live      | GET /live            |

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post, put},
    Router,
};
use store::Store;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the API router over a store.
pub fn router(store: Store) -> Router {
    let state = Arc::new(AppState { store });

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/checkpoints",
            get(routes::list_checkpoints)
                .post(routes::create_checkpoint)
                .delete(routes::clear_checkpoints),
        )
        .route("/checkpoints/:id", get(routes::get_checkpoint))
        .route("/restore/:id", post(routes::restore_checkpoint))
        .route("/publish", put(routes::publish_live))
        .route("/live", get(routes::get_live))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until interrupted.
pub async fn start_server(store: Store, port: u16) -> anyhow::Result<()> {
    let app = router(store);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
