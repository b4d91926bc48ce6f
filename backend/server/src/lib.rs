//! # Reminder Server
//!
//! Serves short comforting reminders, optionally filtered by mood.
//!
//! ## Endpoints
//! All routes live under `/api` and answer `GET` with JSON.
//! - `/api`: service name, corpus size and endpoint list
//! - `/api/reminder`: one reminder, uniform over the whole corpus
//! - `/api/reminders`: the whole corpus as `{ reminders, count }`
//! - `/api/reminders/random`: same as `/api/reminder`
//! - `/api/reminders/category/{id}`: one reminder from mood `id`, 400 on an unknown mood
//!
//! ## Environment
//! - `RUST_HOST`: bind host, default `0.0.0.0`
//! - `RUST_PORT`: bind port, default `3000`
//! - `CORS_MAX_AGE`: preflight cache in seconds, default `3600`
//! - `RUST_LOG`: tracing filter
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use routes::{
    category_handler, info_handler, not_found_handler, reminder_handler, reminders_handler,
};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(state.config.cors_max_age_secs));

    let api = Router::new()
        .route("/", get(info_handler))
        .route("/reminder", get(reminder_handler))
        .route("/reminders", get(reminders_handler))
        .route("/reminders/random", get(reminder_handler))
        .route("/reminders/category/{id}", get(category_handler));

    Router::new()
        .nest("/api", api)
        .fallback(not_found_handler)
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new()?;
    info!("Loaded {} reminders", state.store.count());

    info!("Starting server...");
    let address = state.config.address();
    let app = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
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
