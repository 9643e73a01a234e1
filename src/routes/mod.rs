//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog API lives at `/equipment` with permissive CORS so a page
//! opened from anywhere (including `file://`) can fetch it. Everything else
//! falls through to the static site: `index.html` plus the wasm bundle under
//! `/pkg`.

pub mod equipment;


use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let site = ServeDir::new(&state.web_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/equipment", get(equipment::list_equipment))
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
