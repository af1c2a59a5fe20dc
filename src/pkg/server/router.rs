use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers::analyze::analyze;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::conf::settings;
use crate::prelude::Result;

pub fn build_routes() -> Result<Router> {
    let state = AppState::new()?;
    let app = Router::new()
        .route("/", get(home))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(
            (settings.max_upload_mb * 1024 * 1024) as usize,
        ))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
