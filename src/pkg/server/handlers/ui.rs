use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    conf::settings,
    pkg::server::{state::AppState, uispec::Home},
    prelude::Result,
};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let template = Home {
        service_name: &settings.service_name,
        scoring_profile: state.scoring.name,
    };
    Ok(Html(template.render()?))
}
