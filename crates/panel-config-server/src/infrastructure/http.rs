//! HTTP server: routes, middleware and the listen loop.
//!
//! # Routes
//!
//! | Method | Path                | Handler                                  |
//! |--------|---------------------|------------------------------------------|
//! | GET    | `/`                 | `<static_root>/index.html`               |
//! | GET    | `/components/*`     | files under `<static_root>/components`   |
//! | POST   | `/api/save-config`  | [`SaveConfigService::save`]              |
//! | GET    | anything else       | files under `<static_root>`              |
//!
//! Static lookups are delegated to `tower-http`'s `ServeFile`/`ServeDir`,
//! which infer the content type from the extension, return 404 for missing
//! files and reject `..` path segments.
//!
//! The save endpoint accepts bodies of any size.
//!
//! Every response carries permissive CORS headers (any origin, method and
//! header) and every request is traced through `TraceLayer`.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::SaveConfigService;
use crate::domain::{SaveResponse, ServerConfig};
use crate::infrastructure::store::CsvFileStore;

/// Path of the save endpoint.
pub const SAVE_CONFIG_PATH: &str = "/api/save-config";

// ── Router ────────────────────────────────────────────────────────────────────

/// Builds the complete application router.
///
/// `config` supplies the static root; `saver` handles the save endpoint.
/// Nothing is read from disk until a request arrives, so the static root does
/// not need to exist at this point.
pub fn build_router(config: &ServerConfig, saver: SaveConfigService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route_service("/", ServeFile::new(config.index_file()))
        .nest_service("/components", ServeDir::new(config.components_dir()))
        .route(
            SAVE_CONFIG_PATH,
            // No size cap: every failure must come back as the JSON error body.
            post(save_config).layer(DefaultBodyLimit::disable()),
        )
        .fallback_service(ServeDir::new(&config.static_root))
        .with_state(saver)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// `POST /api/save-config`.
///
/// The body is taken as raw bytes so that any payload, including one sent
/// without `Content-Type: application/json`, goes through the same decoder
/// and fails with the same 500 error shape.
async fn save_config(
    State(saver): State<SaveConfigService>,
    body: Bytes,
) -> (StatusCode, Json<SaveResponse>) {
    match saver.save(&body).await {
        Ok(receipt) => {
            info!(
                "successfully saved {} rows to {}",
                receipt.rows, receipt.destination
            );
            (
                StatusCode::OK,
                Json(SaveResponse::success(format!(
                    "Saved to {}",
                    receipt.destination
                ))),
            )
        }
        Err(e) => {
            error!("save-config failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveResponse::error(e.to_string())),
            )
        }
    }
}

// ── Listen loop ───────────────────────────────────────────────────────────────

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address cannot be bound (port in use, missing
/// permission) or if [`serve`] fails.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    serve(listener, config, shutdown).await
}

/// Serves the router on an already-bound `listener` until `shutdown` resolves.
///
/// Creates the save folder up front so it exists even before the first save.
/// In-flight requests are allowed to finish once `shutdown` fires.
///
/// # Errors
///
/// Returns an error if the save folder cannot be created or the server fails
/// while accepting connections.
pub async fn serve<F>(listener: TcpListener, config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = CsvFileStore::from_config(&config);
    store
        .ensure_folder()
        .await
        .context("failed to prepare the save folder")?;

    let local_addr = listener
        .local_addr()
        .context("failed to read the listener address")?;
    info!(
        "serving {} on {local_addr}, saving to {}",
        config.static_root.display(),
        store.path().display()
    );

    let router = build_router(&config, SaveConfigService::new(Arc::new(store)));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;

    info!("HTTP server stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
