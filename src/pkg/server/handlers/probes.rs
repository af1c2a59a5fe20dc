use axum::extract::State;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    // vocabularies compile lazily, touching them surfaces a bad pattern early
    tracing::debug!(
        "service is healthy, {} skills loaded, '{}' profile",
        state.vocab.skills.len(),
        state.scoring.name
    );
    Ok(())
}
